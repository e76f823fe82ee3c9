use super::{Address, Stack};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delimiter {
    Comment,
    Conditional,
    Loop,
}

impl Delimiter {
    fn open(self) -> char {
        match self {
            Delimiter::Comment => '(',
            Delimiter::Conditional => '[',
            Delimiter::Loop => '{',
        }
    }
    fn close(self) -> char {
        match self {
            Delimiter::Comment => ')',
            Delimiter::Conditional => ']',
            Delimiter::Loop => '}',
        }
    }
}

/// ## Jump targets
///
/// Every delimiter pair is recorded by the position just after each of
/// its two delimiters. Comments and conditionals map forward from the
/// open side, loops map backward from the close side. All of it is
/// resolved in one forward scan since comments do not nest and cannot
/// be skipped scanning backward.

#[derive(Debug)]
pub struct Link {
    pending: Stack<(Delimiter, Address)>,
    targets: HashMap<Address, Address>,
}

impl Default for Link {
    fn default() -> Link {
        Link::new()
    }
}

impl Link {
    pub fn new() -> Link {
        Link {
            pending: Stack::new("DELIMITERS NESTED TOO DEEP"),
            targets: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    fn insert(&mut self, from: Address, to: Address) {
        let previous = self.targets.insert(from, to);
        debug_assert!(previous.is_none(), "jump target {} linked twice", from);
    }

    /// A comment spanning from just after `(` to just after `)`.
    pub fn comment(&mut self, after_open: Address, after_close: Address) {
        self.insert(after_open, after_close);
    }

    pub fn open(&mut self, delimiter: Delimiter, after_open: Address) -> Result<()> {
        self.pending.push((delimiter, after_open))
    }

    pub fn close(&mut self, delimiter: Delimiter, after_close: Address) -> Result<()> {
        let (open, after_open) = match self.pending.pop() {
            Ok(pending) => pending,
            Err(_) => {
                return Err(error!(UnmatchedDelimiter, after_close - 1;
                    &format!("'{}' WITHOUT '{}'", delimiter.close(), delimiter.open())))
            }
        };
        if open != delimiter {
            return Err(error!(UnmatchedDelimiter, after_close - 1;
                &format!("'{}' CLOSES '{}' FROM {}", delimiter.close(), open.open(), after_open - 1)));
        }
        match delimiter {
            Delimiter::Loop => self.insert(after_close, after_open),
            _ => self.insert(after_open, after_close),
        }
        Ok(())
    }

    /// Every opened delimiter must have been closed.
    pub fn finish(&self) -> Result<()> {
        match self.pending.last() {
            None => Ok(()),
            Some((delimiter, after_open)) => Err(error!(UnmatchedDelimiter, after_open - 1;
                &format!("'{}' WITHOUT '{}'", delimiter.open(), delimiter.close()))),
        }
    }

    pub fn target(&self, from: Address) -> Result<Address> {
        match self.targets.get(&from) {
            Some(to) => Ok(*to),
            None => Err(error!(NoJumpTarget, from)),
        }
    }
}
