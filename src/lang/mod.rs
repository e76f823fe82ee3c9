/*!
# Rust Language Module

This Rust module holds the program text, the cursor shared by both
passes, and the error type reported by every stage.

*/

/// Byte offset into the program text or into data space.
pub type Address = usize;

#[macro_use]
mod error;
mod source;

pub use error::Error;
pub use error::ErrorCode;
pub use source::is_whitespace;
pub use source::Source;
