//! # tinyboot
//!
//! A bootstrap interpreter for a tiny byte-oriented stack language.
//! Every instruction is a single byte, so a program is only a little
//! more than a hex dump with comments.
//!
//! Run a program with `tinyboot program.tb`. Its standard input and
//! output are the program's `G` and `W`. Diagnostics, including the
//! `writing address A, count N` line for every write, go to standard
//! error.
//! ```text
//! $ echo '* 1 ^ G 0 s 0 1 W Q' > echo.tb
//! $ echo -n A | tinyboot echo.tb
//! A
//! ```
//!
//! Stop a running program with CTRL-C.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
pub mod term;
