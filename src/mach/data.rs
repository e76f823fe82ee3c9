use super::Address;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

const MAX_LEN: usize = 64 * 1024 * 1024;

/// ## Data space
///
/// Byte-addressable storage separate from the program text. It grows
/// only while compiling; at run time it is read and written in place.

#[derive(Debug, Default, Clone)]
pub struct DataSpace {
    bytes: Vec<u8>,
}

impl DataSpace {
    pub fn new() -> DataSpace {
        DataSpace::default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn grow(&mut self, count: usize) -> Result<()> {
        match self.bytes.len().checked_add(count) {
            Some(len) if len <= MAX_LEN => Ok(()),
            _ => Err(error!(OutOfMemory; "DATA SPACE FULL")),
        }
    }

    pub fn push_byte(&mut self, byte: u8) -> Result<()> {
        self.grow(1)?;
        self.bytes.push(byte);
        Ok(())
    }

    pub fn push_word(&mut self, word: u32) -> Result<()> {
        self.grow(4)?;
        self.bytes.extend_from_slice(&word.to_le_bytes());
        Ok(())
    }

    pub fn allocate(&mut self, count: usize) -> Result<()> {
        self.grow(count)?;
        self.bytes.resize(self.bytes.len() + count, 0);
        Ok(())
    }

    fn range(&self, address: i32, count: i32) -> Result<std::ops::Range<Address>> {
        let illegal = || error!(IllegalAddress; &format!("ADDRESS {} COUNT {}", address, count));
        let start = usize::try_from(address).map_err(|_| illegal())?;
        let len = usize::try_from(count).map_err(|_| illegal())?;
        match start.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(start..end),
            _ => Err(illegal()),
        }
    }

    pub fn slice(&self, address: i32, count: i32) -> Result<&[u8]> {
        let range = self.range(address, count)?;
        Ok(&self.bytes[range])
    }

    /// Reads a little-endian word and sign-extends it.
    pub fn fetch(&self, address: i32) -> Result<i32> {
        let mut word = [0u8; 4];
        word.copy_from_slice(self.slice(address, 4)?);
        Ok(i32::from_le_bytes(word))
    }

    /// Writes the low 32 bits little-endian.
    pub fn store(&mut self, address: i32, value: i32) -> Result<()> {
        let range = self.range(address, 4)?;
        self.bytes[range].copy_from_slice(&(value as u32).to_le_bytes());
        Ok(())
    }

    pub fn store_byte(&mut self, address: i32, value: u8) -> Result<()> {
        let range = self.range(address, 1)?;
        self.bytes[range.start] = value;
        Ok(())
    }
}
