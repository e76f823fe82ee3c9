use super::compile::compile;
use super::{Address, DataSpace, FunctionTable, Link};
use crate::lang::{Error, Source};

/// ## A compiled program
///
/// The output of the compile-time pass: the untouched program text plus
/// everything resolved from it. The text itself is the instruction
/// stream, so there is no separate code section.

#[derive(Debug)]
pub struct Program {
    pub(super) source: Source,
    pub(super) data: DataSpace,
    pub(super) functions: FunctionTable,
    pub(super) link: Link,
    pub(super) start: Option<Address>,
}

impl Program {
    pub fn compile<T: Into<Vec<u8>>>(text: T) -> Result<Program, Error> {
        compile(Source::new(text))
    }
    pub fn source(&self) -> &Source {
        &self.source
    }
    pub fn data(&self) -> &DataSpace {
        &self.data
    }
    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }
    pub fn link(&self) -> &Link {
        &self.link
    }
    pub fn start(&self) -> Option<Address> {
        self.start
    }
}
