//! Contains the bounded buffer a line of assembly text is rendered into.

use crate::error::Error;
use arrayvec::ArrayString;
use std::fmt::{self, Write};
use std::ops::Deref;

/// The capacity of a rendered line, in bytes: a 32-byte line buffer less
/// its terminator. The longest instruction, an indexed load of an
/// immediate such as `ld (ix-128), 0xff`, fits with room to spare.
pub const MAX_LINE_LEN: usize = 31;

/// Accumulates the text of one instruction during a formatting pass.
/// Appends are checked against `MAX_LINE_LEN` and fail rather than truncate.
#[derive(Default)]
pub struct LineBuffer {
    text: ArrayString<MAX_LINE_LEN>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) -> Result<(), Error> {
        self.text.try_push(c).map_err(|_| Self::overflow())
    }

    pub fn push_str(&mut self, s: &str) -> Result<(), Error> {
        self.text.try_push_str(s).map_err(|_| Self::overflow())
    }

    /// Appends an 8-bit value as `0xHH`.
    pub fn push_u8(&mut self, value: u8) -> Result<(), Error> {
        self.push_fmt(format_args!("0x{:02x}", value))
    }

    /// Appends a 16-bit value as `0xHHHH`.
    pub fn push_u16(&mut self, value: u16) -> Result<(), Error> {
        self.push_fmt(format_args!("0x{:04x}", value))
    }

    /// Appends a signed decimal value with an explicit sign.
    pub fn push_disp(&mut self, value: i32) -> Result<(), Error> {
        self.push_fmt(format_args!("{:+}", value))
    }

    fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        // A failed write may leave a partial value behind, but the
        // buffer is discarded along with the error.
        self.text.write_fmt(args).map_err(|_| Self::overflow())
    }

    fn overflow() -> Error {
        Error::Overflow { capacity: MAX_LINE_LEN }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Seals the buffer into a finished line.
    pub fn finish(self) -> Line {
        Line { text: self.text }
    }
}

/// Represents one fully rendered line of assembly text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    text: ArrayString<MAX_LINE_LEN>,
}

impl Line {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
