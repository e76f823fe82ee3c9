use super::{Address, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

const EXCERPT_LEN: usize = 10;

pub fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\n' || byte == b'\t' || byte == b'\r'
}

/// ## Program text and the cursor into it
///
/// Both passes read the same bytes through the same cursor. The text
/// never changes after loading; only the cursor moves.

#[derive(Debug, Clone)]
pub struct Source {
    text: Vec<u8>,
    cursor: Address,
}

impl Source {
    pub fn new<T: Into<Vec<u8>>>(text: T) -> Source {
        Source {
            text: text.into(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn cursor(&self) -> Address {
        self.cursor
    }

    pub fn seek(&mut self, address: Address) {
        self.cursor = address;
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.text.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.text.get(self.cursor).copied()
    }

    pub fn eat(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.cursor += 1;
        Some(byte)
    }

    /// Step back over the byte just eaten.
    pub fn back(&mut self) {
        debug_assert!(self.cursor > 0);
        self.cursor -= 1;
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if !is_whitespace(byte) {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Reads a run of decimal digits. The cursor stops on the first
    /// byte that is not a digit.
    pub fn read_number(&mut self) -> Result<u32> {
        let start = self.cursor;
        let mut value: u32 = 0;
        while let Some(byte) = self.peek() {
            if !byte.is_ascii_digit() {
                break;
            }
            let digit = u32::from(byte - b'0');
            value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => v,
                None => {
                    let error = error!(Overflow, start; "NUMBER TOO LARGE");
                    return Err(error.or_excerpt(self.quote(self.cursor + 1)));
                }
            };
            self.cursor += 1;
        }
        if self.cursor == start {
            return Err(match self.peek() {
                Some(byte) => error!(MissingOperand, start; "EXPECTED NUMBER").byte(byte),
                None => error!(MissingOperand, start; "EXPECTED NUMBER, FOUND END"),
            });
        }
        Ok(value)
    }

    /// The few bytes leading up to `end`, for diagnostics.
    pub fn excerpt(&self, end: Address) -> &[u8] {
        let end = end.min(self.text.len());
        let start = end.saturating_sub(EXCERPT_LEN);
        &self.text[start..end]
    }

    /// Excerpt formatted as an escaped, quoted string.
    pub fn quote(&self, end: Address) -> String {
        let escaped: String = self
            .excerpt(end)
            .iter()
            .flat_map(|b| std::ascii::escape_default(*b))
            .map(char::from)
            .collect();
        format!("after \"{}\"", escaped)
    }
}
