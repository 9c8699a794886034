//! Contains the naming tables of operations whose mnemonic is chosen by
//! an opcode field rather than fixed by the template.

use crate::common::OperandKind;
use crate::error::Error;
use strum_macros::{EnumCount, EnumIter};

/// Represents an 8-bit arithmetic or logical operation on the accumulator,
/// in the order of its 3-bit opcode encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum AluOperation {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOperation {
    pub fn name(self) -> &'static str {
        use AluOperation::*;

        match self {
            Add => "add",
            Adc => "adc",
            Sub => "sub",
            Sbc => "sbc",
            And => "and",
            Xor => "xor",
            Or => "or",
            Cp => "cp",
        }
    }

    /// Whether the accumulator is written out as an explicit first operand,
    /// as in `add a, b`. The remaining operations leave it implied.
    pub fn is_two_operand(self) -> bool {
        matches!(self, AluOperation::Add | AluOperation::Adc | AluOperation::Sbc)
    }
}

impl TryFrom<u8> for AluOperation {
    type Error = Error;

    /// Decodes the 3-bit operation field of an ALU opcode.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use AluOperation::*;

        Ok(match value {
            0 => Add,
            1 => Adc,
            2 => Sub,
            3 => Sbc,
            4 => And,
            5 => Xor,
            6 => Or,
            7 => Cp,
            _ => return Err(Error::InvalidEncoding { kind: OperandKind::Alu, value }),
        })
    }
}

/// Represents a block load instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum BlockTransfer {
    Ldi,
    Ldd,
    Ldir,
    Lddr,
}

impl BlockTransfer {
    pub fn name(self) -> &'static str {
        use BlockTransfer::*;

        match self {
            Ldi => "ldi",
            Ldd => "ldd",
            Ldir => "ldir",
            Lddr => "lddr",
        }
    }
}

impl TryFrom<u8> for BlockTransfer {
    type Error = Error;

    /// Decodes the opcode byte following an `ED` prefix.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use BlockTransfer::*;

        Ok(match value {
            0xA0 => Ldi,
            0xA8 => Ldd,
            0xB0 => Ldir,
            0xB8 => Lddr,
            _ => return Err(Error::InvalidEncoding { kind: OperandKind::Block, value }),
        })
    }
}

impl_display_name!(AluOperation, BlockTransfer);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn alu_names() {
        let names = AluOperation::iter().map(|op| op.to_string()).collect::<Vec<String>>();
        assert_eq!(vec!["add", "adc", "sub", "sbc", "and", "xor", "or", "cp"], names);
    }

    #[test]
    fn two_operand_alu() {
        let two_operand =
            AluOperation::iter().filter(|op| op.is_two_operand()).collect::<Vec<AluOperation>>();
        assert_eq!(vec![AluOperation::Add, AluOperation::Adc, AluOperation::Sbc], two_operand);
    }

    #[test]
    fn decode_alu_field() {
        assert_eq!(Ok(AluOperation::Xor), AluOperation::try_from(5));
        assert!(AluOperation::try_from(8).is_err());
    }

    #[test]
    fn block_transfer_names() {
        assert_eq!("ldi", BlockTransfer::Ldi.name());
        assert_eq!("lddr", BlockTransfer::Lddr.to_string());
        assert_eq!(Ok(BlockTransfer::Ldir), BlockTransfer::try_from(0xB0));
        assert_eq!(
            Err(Error::InvalidEncoding { kind: OperandKind::Block, value: 0xA1 }),
            BlockTransfer::try_from(0xA1)
        );
    }
}
