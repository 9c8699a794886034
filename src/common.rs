use crate::error::Error;
use crate::operation::{AluOperation, BlockTransfer};
use crate::register::*;
use std::fmt;
use strum_macros::{EnumCount, EnumIter};

macro_rules! impl_display_name {
    ($( $ident: ident ),*) => (
        $( impl std::fmt::Display for $ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                // Write out the canonical assembly name.
                f.write_str(self.name())
            }
        } )*
    );
}

/// Sign-extends a raw displacement byte, as stored in an indexed
/// instruction, to the signed offset it encodes.
pub fn sign_extend8(byte: u8) -> i32 {
    byte as i8 as i32
}

/// Represents the condition operand of conditional jumps, calls and returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum Condition {
    NZ, // Non-zero
    Z,  // Zero
    NC, // No carry
    C,  // Carry
    PO, // Parity odd
    PE, // Parity even
    P,  // Sign positive
    M,  // Sign negative
}

impl Condition {
    /// Returns the canonical mnemonic of the condition.
    pub fn name(self) -> &'static str {
        use Condition::*;

        match self {
            NZ => "nz",
            Z => "z",
            NC => "nc",
            C => "c",
            PO => "po",
            PE => "pe",
            P => "p",
            M => "m",
        }
    }
}

impl TryFrom<u8> for Condition {
    type Error = Error;

    /// Decodes the 3-bit `cc` field of a conditional instruction.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Condition::*;

        Ok(match value {
            0 => NZ,
            1 => Z,
            2 => NC,
            3 => C,
            4 => PO,
            5 => PE,
            6 => P,
            7 => M,
            _ => return Err(Error::InvalidEncoding { kind: OperandKind::Condition, value }),
        })
    }
}

impl_display_name!(Condition);

/// Identifies the type of an `Operand` without its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Register,
    IndexRegister,
    Displacement,
    RegisterPair,
    Byte,
    Word,
    Condition,
    Relative,
    Alu,
    Block,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use OperandKind::*;

        let description = match self {
            Register => "register",
            IndexRegister => "index register",
            Displacement => "displacement",
            RegisterPair => "register pair",
            Byte => "byte",
            Word => "word",
            Condition => "condition",
            Relative => "relative address",
            Alu => "ALU operation",
            Block => "block transfer",
        };

        f.write_str(description)
    }
}

/// Represents one decoded value handed to the formatter.
/// The position of each operand in a list is dictated by the
/// directives of the template it is formatted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    IndexRegister(IndexRegister),
    Displacement(u8),
    RegisterPair(RegisterPair),
    Byte(u8),
    Word(u16),
    Condition(Condition),
    Relative(i32),
    Alu(AluOperation),
    Block(BlockTransfer),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Register(_) => OperandKind::Register,
            Operand::IndexRegister(_) => OperandKind::IndexRegister,
            Operand::Displacement(_) => OperandKind::Displacement,
            Operand::RegisterPair(_) => OperandKind::RegisterPair,
            Operand::Byte(_) => OperandKind::Byte,
            Operand::Word(_) => OperandKind::Word,
            Operand::Condition(_) => OperandKind::Condition,
            Operand::Relative(_) => OperandKind::Relative,
            Operand::Alu(_) => OperandKind::Alu,
            Operand::Block(_) => OperandKind::Block,
        }
    }
}

macro_rules! impl_from_operand {
    ($( $ident: ident ),*) => (
        $( impl From<$ident> for Operand {
            fn from(value: $ident) -> Self {
                Operand::$ident(value)
            }
        } )*
    );
}

impl_from_operand!(Register, IndexRegister, RegisterPair, Condition);

impl From<AluOperation> for Operand {
    fn from(value: AluOperation) -> Self {
        Operand::Alu(value)
    }
}

impl From<BlockTransfer> for Operand {
    fn from(value: BlockTransfer) -> Self {
        Operand::Block(value)
    }
}
