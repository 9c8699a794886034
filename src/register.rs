//! Contains the naming tables of Z80 register operands,
//! including single registers, register pairs, and index registers.

use crate::common::OperandKind;
use crate::error::Error;
use strum_macros::{EnumCount, EnumIter};

/// Used to identify a single register operand
/// in the order of its 3-bit opcode encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum Register {
    B,
    C,
    D,
    E,
    H,
    L,
    AtHL, // Memory at the address held in HL
    A,
}

impl Register {
    /// Returns the canonical name of the register.
    pub fn name(self) -> &'static str {
        use Register::*;

        match self {
            B => "b",
            C => "c",
            D => "d",
            E => "e",
            H => "h",
            L => "l",
            AtHL => "(hl)",
            A => "a",
        }
    }
}

impl TryFrom<u8> for Register {
    type Error = Error;

    /// Decodes the 3-bit `r` field of an opcode.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Register::*;

        Ok(match value {
            0 => B,
            1 => C,
            2 => D,
            3 => E,
            4 => H,
            5 => L,
            6 => AtHL,
            7 => A,
            _ => return Err(Error::InvalidEncoding { kind: OperandKind::Register, value }),
        })
    }
}

/// Selects how references to HL are rendered. Instructions behind a
/// `DD` or `FD` prefix replace HL with IX or IY respectively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum IndexRegister {
    #[default]
    HL,
    IX,
    IY,
}

impl IndexRegister {
    pub fn name(self) -> &'static str {
        use IndexRegister::*;

        match self {
            HL => "hl",
            IX => "ix",
            IY => "iy",
        }
    }

    /// Whether HL references are redirected to an index register.
    pub fn is_indexed(self) -> bool {
        self != IndexRegister::HL
    }
}

impl TryFrom<u8> for IndexRegister {
    type Error = Error;

    /// Decodes the `DD` or `FD` prefix byte that selects the index register.
    /// Unprefixed instructions use `IndexRegister::default()`.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use IndexRegister::*;

        Ok(match value {
            0xDD => IX,
            0xFD => IY,
            _ => return Err(Error::InvalidEncoding { kind: OperandKind::IndexRegister, value }),
        })
    }
}

/// Used to identify a register pair operand
/// in the order of its 2-bit opcode encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum RegisterPair {
    BC,
    DE,
    HL,
    SP,
}

impl RegisterPair {
    /// Returns the name of the pair when HL is not redirected.
    pub fn name(self) -> &'static str {
        self.name_with(IndexRegister::HL)
    }

    /// Returns the name of the pair, rendering HL as the
    /// given index register. Other pairs ignore it.
    pub fn name_with(self, index: IndexRegister) -> &'static str {
        use RegisterPair::*;

        match self {
            BC => "bc",
            DE => "de",
            HL => index.name(),
            SP => "sp",
        }
    }
}

impl TryFrom<u8> for RegisterPair {
    type Error = Error;

    /// Decodes the 2-bit `rp` field of an opcode.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use RegisterPair::*;

        Ok(match value {
            0 => BC,
            1 => DE,
            2 => HL,
            3 => SP,
            _ => return Err(Error::InvalidEncoding { kind: OperandKind::RegisterPair, value }),
        })
    }
}

impl_display_name!(Register, IndexRegister, RegisterPair);
