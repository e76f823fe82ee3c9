use super::{Address, DataSpace, FunctionTable, Link, Opcode, Operation, Program, Stack};
use crate::error;
use crate::lang::{Error, Source};
use std::fmt::Write as _;

type Result<T> = std::result::Result<T, Error>;

/// ## Run-time engine
///
/// Executes a compiled program by fetching bytes from the program text
/// at the cursor. The engine does no I/O of its own; `execute` reports
/// what the caller must do through an `Event`.

pub struct Runtime {
    source: Source,
    data: DataSpace,
    functions: FunctionTable,
    link: Link,
    stack: Stack<i32>,
    rstack: Stack<Address>,
    state: State,
    pending: Option<Error>,
    tron: bool,
    traced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Running,
    Input,
    Stopped,
}

#[derive(Debug)]
pub enum Event {
    /// The cycle budget ran out; call `execute` again.
    Running,
    /// Waiting for `Runtime::input`.
    Input,
    /// Data space bytes starting at an address, for the output stream.
    Write(Address, Vec<u8>),
    /// The instruction about to execute, when tracing is on.
    Trace(Address, u8),
    Quit,
    Error(Error),
    Stopped,
}

impl Runtime {
    pub fn new(program: Program) -> Result<Runtime> {
        let start = match program.start {
            Some(start) => start,
            None => return Err(error!(NoStartAddress; "PROGRAM HAS NO '^'")),
        };
        let mut source = program.source;
        source.seek(start);
        Ok(Runtime {
            source,
            data: program.data,
            functions: program.functions,
            link: program.link,
            stack: Stack::new("STACK OVERFLOW"),
            rstack: Stack::new("RETURN STACK OVERFLOW").on_underflow(|| error!(ReturnWithoutCall)),
            state: State::Running,
            pending: None,
            tron: false,
            traced: false,
        })
    }

    pub fn set_tron(&mut self, tron: bool) {
        self.tron = tron;
    }

    pub fn cursor(&self) -> Address {
        self.source.cursor()
    }

    pub fn stack(&self) -> &[i32] {
        self.stack.as_slice()
    }

    pub fn return_stack(&self) -> &[Address] {
        self.rstack.as_slice()
    }

    pub fn data(&self) -> &DataSpace {
        &self.data
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }

    /// Answers an `Event::Input`. `None` is end of input.
    pub fn input(&mut self, byte: Option<u8>) {
        if self.state != State::Input {
            return;
        }
        self.state = State::Running;
        let value = match byte {
            Some(byte) => i32::from(byte),
            None => -1,
        };
        if let Err(error) = self.stack.push(value) {
            let pc = self.source.cursor() - 1;
            self.pending = Some(error.or_at(pc).or_excerpt(self.source.quote(pc + 1)));
        }
    }

    pub fn interrupt(&mut self) {
        if self.state != State::Stopped {
            let pc = self.source.cursor();
            self.pending = Some(error!(Break, pc).or_excerpt(self.source.quote(pc)));
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(error) = self.pending.take() {
            self.state = State::Stopped;
            return Event::Error(error);
        }
        match self.state {
            State::Stopped => return Event::Stopped,
            State::Input => return Event::Input,
            State::Running => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => continue,
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.state = State::Stopped;
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    fn decode(&self, byte: u8) -> Option<Opcode> {
        match self.functions.get(byte) {
            Some(function) => Some(Opcode::from(function)),
            None => Opcode::from_byte(byte),
        }
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let pc = self.source.cursor();
        let byte = match self.source.peek() {
            Some(byte) => byte,
            None => {
                let error = error!(OutOfBounds, pc; "RAN PAST END OF PROGRAM");
                return Err(error.or_excerpt(self.source.quote(pc)));
            }
        };
        if self.tron && !self.traced {
            self.traced = true;
            return Ok(Some(Event::Trace(pc, byte)));
        }
        self.traced = false;
        self.source.eat();
        let opcode = match self.decode(byte) {
            Some(opcode) => opcode,
            None => {
                let error = error!(UnhandledInstruction, pc).byte(byte);
                return Err(error.or_excerpt(self.source.quote(pc + 1)));
            }
        };
        self.dispatch(opcode).map_err(|e| {
            e.or_at(pc)
                .byte(byte)
                .or_message(&format!("IN {}", opcode))
                .or_excerpt(self.source.quote(pc + 1))
        })
    }

    fn jump(&mut self) -> Result<()> {
        let to = self.link.target(self.source.cursor())?;
        self.source.seek(to);
        Ok(())
    }

    fn dispatch(&mut self, opcode: Opcode) -> Result<Option<Event>> {
        use Opcode::*;
        match opcode {
            Write => {
                let (address, count) = self.stack.pop_2()?;
                let bytes = self.data.slice(address, count)?.to_vec();
                return Ok(Some(Event::Write(address as Address, bytes)));
            }
            Read => {
                self.state = State::Input;
                return Ok(Some(Event::Input));
            }
            Quit => {
                self.state = State::Stopped;
                return Ok(Some(Event::Quit));
            }
            Add => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(Operation::sum(lhs, rhs))?;
            }
            Not => {
                let val = self.stack.pop()?;
                self.stack.push(Operation::not(val))?;
            }
            Less => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(Operation::less(lhs, rhs))?;
            }
            Fetch => {
                let address = self.stack.pop()?;
                let val = self.data.fetch(address)?;
                self.stack.push(val)?;
            }
            Store => {
                let (val, address) = self.stack.pop_2()?;
                self.data.store(address, val)?;
            }
            StoreByte => {
                let (val, address) = self.stack.pop_2()?;
                self.data.store_byte(address, Operation::low_byte(val))?;
            }
            Literal => {
                self.source.back();
                let number = self.source.read_number()?;
                self.stack.push(Operation::literal(number))?;
            }
            If => {
                if self.stack.pop()? == 0 {
                    self.jump()?;
                }
            }
            EndLoop => {
                if self.stack.pop()? != 0 {
                    self.jump()?;
                }
            }
            Comment => self.jump()?,
            Return => {
                let address = self.rstack.pop()?;
                self.source.seek(address);
            }
            Call(target) => {
                self.rstack.push(self.source.cursor())?;
                self.source.seek(target);
            }
            Label(address) => self.stack.push(address as i32)?,
            EndIf | Loop | Space => {}
        }
        Ok(None)
    }

    /// Registers, stacks and the text around the cursor.
    pub fn dump(&self) -> String {
        let mut s = String::new();
        let pc = self.source.cursor();
        let _ = writeln!(
            s,
            "pc=0x{:x}, stack depth={}, return depth={}, data length=0x{:x}",
            pc,
            self.stack.len(),
            self.rstack.len(),
            self.data.len()
        );
        let _ = writeln!(s, "stack: {:?}", self.stack);
        let _ = writeln!(s, "return: {:?}", self.rstack);
        let _ = writeln!(s, "around pc:");
        hexdump(&mut s, self.source.as_bytes(), pc.saturating_sub(16), 32);
        s
    }
}

fn hexdump(s: &mut String, bytes: &[u8], start: Address, len: usize) {
    for addr in (start..start + len).step_by(16) {
        let _ = write!(s, "{:08x}: ", addr);
        for j in (0..16).step_by(2) {
            for k in 0..2 {
                let addr_x = addr + j + k;
                if addr_x - start >= len {
                    continue;
                }
                match bytes.get(addr_x) {
                    Some(byte) => {
                        let _ = write!(s, "{:02x}", byte);
                    }
                    None => s.push_str("--"),
                }
            }
            s.push(' ');
        }
        s.push('\n');
    }
}
