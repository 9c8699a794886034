//! The error type shared by every fallible operation in the crate.
//!
//! All variants describe a broken contract between an instruction decoder
//! and the formatter. None of them is expected to occur with a correct
//! decoder, which is why the panicking entry points exist alongside the
//! `Result`-returning ones.

use crate::common::OperandKind;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The rendered line does not fit in the output buffer.
    Overflow { capacity: usize },
    /// A template was empty.
    EmptyTemplate,
    /// The operand list ran out before the template was satisfied.
    MissingOperand { position: usize, expected: OperandKind },
    /// An operand does not have the kind its directive consumes.
    OperandMismatch { position: usize, expected: OperandKind, found: OperandKind },
    /// Operands remained after the last directive.
    UnusedOperands { consumed: usize, supplied: usize },
    /// A raw opcode field is outside the declared set of its enumeration.
    InvalidEncoding { kind: OperandKind, value: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            Overflow { capacity } => {
                write!(f, "rendered line exceeds the {}-byte output buffer", capacity)
            }
            EmptyTemplate => write!(f, "empty format template"),
            MissingOperand { position, expected } => {
                write!(f, "operand {} missing, expected {}", position, expected)
            }
            OperandMismatch { position, expected, found } => {
                write!(f, "operand {} is {}, expected {}", position, found, expected)
            }
            UnusedOperands { consumed, supplied } => {
                write!(f, "template consumed {} of {} operands", consumed, supplied)
            }
            InvalidEncoding { kind, value } => {
                write!(f, "invalid {} encoding 0x{:02x}", kind, value)
            }
        }
    }
}

impl std::error::Error for Error {}
