use super::Address;

pub struct Error {
    code: u16,
    address: Option<Address>,
    byte: Option<u8>,
    message: String,
    excerpt: Option<String>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            byte: None,
            message: String::new(),
            excerpt: None,
        }
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn offending_byte(&self) -> Option<u8> {
        self.byte
    }

    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    pub fn at(self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    /// Attach a position unless a more precise one is already known.
    pub fn or_at(self, address: Address) -> Error {
        match self.address {
            Some(_) => self,
            None => self.at(address),
        }
    }

    pub fn or_message(self, message: &str) -> Error {
        if self.message.is_empty() {
            self.message(message)
        } else {
            self
        }
    }

    pub fn byte(self, byte: u8) -> Error {
        Error {
            byte: Some(byte),
            ..self
        }
    }

    /// Source text leading up to the error, kept from the first caller
    /// that knows it.
    pub fn or_excerpt(self, excerpt: String) -> Error {
        match self.excerpt {
            Some(_) => self,
            None => Error {
                excerpt: Some(excerpt),
                ..self
            },
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    UndefinedInstruction = 1,
    UnmatchedDelimiter = 2,
    NoStartAddress = 3,
    UnhandledInstruction = 4,
    OutOfBounds = 5,
    IllegalAddress = 6,
    StackUnderflow = 7,
    ReturnWithoutCall = 8,
    Overflow = 9,
    OutOfMemory = 10,
    MissingOperand = 11,
    NoJumpTarget = 12,
    FileNotFound = 13,
    InputOutput = 14,
    Break = 15,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "UNDEFINED INSTRUCTION",
            2 => "UNMATCHED DELIMITER",
            3 => "NO START ADDRESS",
            4 => "UNHANDLED INSTRUCTION",
            5 => "OUT OF BOUNDS",
            6 => "ILLEGAL ADDRESS",
            7 => "STACK UNDERFLOW",
            8 => "RETURN WITHOUT CALL",
            9 => "OVERFLOW",
            10 => "OUT OF MEMORY",
            11 => "MISSING OPERAND",
            12 => "NO JUMP TARGET",
            13 => "FILE NOT FOUND",
            14 => "I/O ERROR",
            15 => "BREAK",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if let Some(address) = self.address {
            write!(f, " AT {}", address)?;
        }
        if let Some(byte) = self.byte {
            write!(f, " ('{}')", std::ascii::escape_default(byte))?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        if let Some(excerpt) = &self.excerpt {
            write!(f, "; {}", excerpt)?;
        }
        Ok(())
    }
}
