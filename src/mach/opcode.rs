use super::Address;
use crate::lang::is_whitespace;

/// ## Compile-time dispatch table
///
/// Directives shape the program before it runs: they fill data space,
/// bind names, mark the entry point, and pair up delimiters.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive {
    /// `(` Skip to the matching `)`.
    Comment,
    /// `v` Bind the next byte to the current end of data space.
    Label,
    /// `:` Bind the next byte to a call of the text that follows it.
    Define,
    /// `b` Append one byte to data space.
    LiteralByte,
    /// `#` Append a little-endian word to data space.
    LiteralWord,
    /// `*` Append zeroed bytes to data space.
    Allocate,
    /// `^` Execution starts here.
    Start,
    IfOpen,
    IfClose,
    LoopOpen,
    LoopClose,
    Space,
}

impl Directive {
    pub fn from_byte(byte: u8) -> Option<Directive> {
        use Directive::*;
        match byte {
            b'(' => Some(Comment),
            b'v' => Some(Label),
            b':' => Some(Define),
            b'b' => Some(LiteralByte),
            b'#' => Some(LiteralWord),
            b'*' => Some(Allocate),
            b'^' => Some(Start),
            b'[' => Some(IfOpen),
            b']' => Some(IfClose),
            b'{' => Some(LoopOpen),
            b'}' => Some(LoopClose),
            _ if is_whitespace(byte) => Some(Space),
            _ => None,
        }
    }
}

/// ## Run-time dispatch table
///
/// The virtual machine has no registers.
/// Every operation is performed on the stack.
///
/// Built-in opcodes come from a fixed byte table. `Call` and `Label`
/// are produced by names bound at compile time.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opcode {
    // *** Input and output
    /// Pop count, pop address, write that much data space to output.
    Write,
    /// Push one byte of input, or -1 at end of input.
    Read,
    Quit,

    // *** Arithmetic
    Add,
    Not,
    Less,

    // *** Data space
    Fetch,
    Store,
    StoreByte,
    /// A decimal number inline in the text.
    Literal,

    // *** Branch control
    /// Pop and skip the body when zero.
    If,
    EndIf,
    Loop,
    /// Pop and repeat the body when nonzero.
    EndLoop,
    Comment,
    Return,
    Call(Address),
    /// Push a data space address bound by `v`.
    Label(Address),

    Space,
}

impl Opcode {
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        use Opcode::*;
        match byte {
            b'W' => Some(Write),
            b'G' => Some(Read),
            b'Q' => Some(Quit),
            b'+' => Some(Add),
            b'~' => Some(Not),
            b'<' => Some(Less),
            b'@' => Some(Fetch),
            b'!' => Some(Store),
            b's' => Some(StoreByte),
            b';' => Some(Return),
            b'[' => Some(If),
            b']' => Some(EndIf),
            b'{' => Some(Loop),
            b'}' => Some(EndLoop),
            b'(' => Some(Comment),
            b'0'..=b'9' => Some(Literal),
            _ if is_whitespace(byte) => Some(Space),
            _ => None,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Write => write!(f, "WRITE"),
            Read => write!(f, "READ"),
            Quit => write!(f, "QUIT"),

            Add => write!(f, "ADD"),
            Not => write!(f, "NOT"),
            Less => write!(f, "LESS"),

            Fetch => write!(f, "FETCH"),
            Store => write!(f, "STORE"),
            StoreByte => write!(f, "STOREBYTE"),
            Literal => write!(f, "LITERAL"),

            If => write!(f, "IF"),
            EndIf => write!(f, "ENDIF"),
            Loop => write!(f, "LOOP"),
            EndLoop => write!(f, "ENDLOOP"),
            Comment => write!(f, "COMMENT"),
            Return => write!(f, "RETURN"),
            Call(a) => write!(f, "CALL({})", a),
            Label(a) => write!(f, "LABEL({})", a),

            Space => write!(f, "SPACE"),
        }
    }
}
