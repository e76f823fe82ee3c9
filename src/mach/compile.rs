use super::link::Delimiter;
use super::{DataSpace, Directive, Function, FunctionTable, Link, Opcode, Program};
use crate::error;
use crate::lang::{Address, Error, Source};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// One forward scan over the text. Directives build data space, bind
/// names and link delimiters; bytes that only mean something at run
/// time are stepped over.
pub fn compile(source: Source) -> Result<Program> {
    Compiler::new(source).compile()
}

struct Compiler {
    source: Source,
    data: DataSpace,
    functions: FunctionTable,
    link: Link,
    start: Option<Address>,
}

impl Compiler {
    fn new(source: Source) -> Compiler {
        Compiler {
            source,
            data: DataSpace::new(),
            functions: FunctionTable::new(),
            link: Link::new(),
            start: None,
        }
    }

    fn compile(mut self) -> Result<Program> {
        self.source.seek(0);
        while let Some(byte) = self.source.eat() {
            let address = self.source.cursor() - 1;
            match Directive::from_byte(byte) {
                Some(directive) => self
                    .directive(directive)
                    .map_err(|e| self.locate(e, address))?,
                None => {
                    if !self.is_run_time(byte) {
                        let error = error!(UndefinedInstruction, address).byte(byte);
                        return Err(self.locate(error, address));
                    }
                }
            }
        }
        if let Err(error) = self.link.finish() {
            return Err(self.locate(error, self.source.len()));
        }
        self.source.seek(0);
        Ok(Program {
            source: self.source,
            data: self.data,
            functions: self.functions,
            link: self.link,
            start: self.start,
        })
    }

    /// Quotes the text up to and including the byte the error points at.
    fn locate(&self, error: Error, address: Address) -> Error {
        let error = error.or_at(address);
        let end = error.address().unwrap_or(address) + 1;
        error.or_excerpt(self.source.quote(end))
    }

    /// Names count only once their directive has been scanned.
    fn is_run_time(&self, byte: u8) -> bool {
        Opcode::from_byte(byte).is_some() || self.functions.contains(byte)
    }

    fn directive(&mut self, directive: Directive) -> Result<()> {
        use Directive::*;
        match directive {
            Comment => self.r#comment(),
            Label => self.r#label(),
            Define => self.r#define(),
            LiteralByte => self.r#literal_byte(),
            LiteralWord => self.r#literal_word(),
            Allocate => self.r#allocate(),
            Start => self.r#start(),
            IfOpen => self.link.open(Delimiter::Conditional, self.source.cursor()),
            IfClose => self.link.close(Delimiter::Conditional, self.source.cursor()),
            LoopOpen => self.link.open(Delimiter::Loop, self.source.cursor()),
            LoopClose => self.link.close(Delimiter::Loop, self.source.cursor()),
            Space => Ok(()),
        }
    }

    fn name(&mut self) -> Result<u8> {
        self.source.skip_whitespace();
        match self.source.eat() {
            Some(byte) => Ok(byte),
            None => Err(error!(MissingOperand; "EXPECTED NAME, FOUND END")),
        }
    }

    fn number(&mut self) -> Result<u32> {
        self.source.skip_whitespace();
        self.source.read_number()
    }

    fn r#comment(&mut self) -> Result<()> {
        let after_open = self.source.cursor();
        loop {
            match self.source.eat() {
                Some(b')') => break,
                Some(_) => continue,
                None => return Err(error!(UnmatchedDelimiter, after_open - 1; "'(' WITHOUT ')'")),
            }
        }
        self.link.comment(after_open, self.source.cursor());
        Ok(())
    }

    fn r#label(&mut self) -> Result<()> {
        let name = self.name()?;
        self.functions.bind(name, Function::Label(self.data.len()));
        Ok(())
    }

    fn r#define(&mut self) -> Result<()> {
        let name = self.name()?;
        self.functions.bind(name, Function::Call(self.source.cursor()));
        Ok(())
    }

    fn r#literal_byte(&mut self) -> Result<()> {
        let number = self.number()?;
        match u8::try_from(number) {
            Ok(byte) => self.data.push_byte(byte),
            Err(_) => Err(error!(Overflow; &format!("BYTE {} OUT OF RANGE", number))),
        }
    }

    fn r#literal_word(&mut self) -> Result<()> {
        let number = self.number()?;
        self.data.push_word(number)
    }

    fn r#allocate(&mut self) -> Result<()> {
        let number = self.number()?;
        self.data.allocate(number as usize)
    }

    fn r#start(&mut self) -> Result<()> {
        self.start = Some(self.source.cursor());
        Ok(())
    }
}
