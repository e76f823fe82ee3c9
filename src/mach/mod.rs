/*!
## Rust Machine Module

This Rust module is the compile-time pass and the run-time engine.
Both walk the same program text; there is no bytecode in between.

*/

pub use crate::lang::Address;

mod compile;
mod data;
mod function;
mod link;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;

pub use data::DataSpace;
pub use function::Function;
pub use function::FunctionTable;
pub use link::Delimiter;
pub use link::Link;
pub use opcode::Directive;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;

#[cfg(test)]
mod tests;
