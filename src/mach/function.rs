use super::{Address, Opcode};

/// What a name byte stands for once it has been bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Function {
    /// Call the program text starting at this position.
    Call(Address),
    /// Push this data space address.
    Label(Address),
}

impl From<Function> for Opcode {
    fn from(function: Function) -> Opcode {
        match function {
            Function::Call(addr) => Opcode::Call(addr),
            Function::Label(addr) => Opcode::Label(addr),
        }
    }
}

/// ## Name bindings
///
/// One slot per byte value. A later binding of the same name replaces
/// the earlier one.

#[derive(Debug, Clone)]
pub struct FunctionTable {
    slots: [Option<Function>; 256],
}

impl Default for FunctionTable {
    fn default() -> FunctionTable {
        FunctionTable { slots: [None; 256] }
    }
}

impl FunctionTable {
    pub fn new() -> FunctionTable {
        FunctionTable::default()
    }

    pub fn bind(&mut self, name: u8, function: Function) {
        self.slots[name as usize] = Some(function);
    }

    pub fn get(&self, name: u8) -> Option<Function> {
        self.slots[name as usize]
    }

    pub fn contains(&self, name: u8) -> bool {
        self.get(name).is_some()
    }
}
