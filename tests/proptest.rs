//! Property-based tests using proptest.
//!
//! These cover the rendering rules of each directive across the full
//! range of its operand values, and the totality of the naming tables.

use proptest::prelude::*;
use strum::IntoEnumIterator;
use z80fmt::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_register() -> impl Strategy<Value = Register> {
    prop::sample::select(Register::iter().collect::<Vec<_>>())
}

fn arb_index() -> impl Strategy<Value = IndexRegister> {
    prop::sample::select(IndexRegister::iter().collect::<Vec<_>>())
}

fn arb_pair() -> impl Strategy<Value = RegisterPair> {
    prop::sample::select(RegisterPair::iter().collect::<Vec<_>>())
}

fn arb_alu() -> impl Strategy<Value = AluOperation> {
    prop::sample::select(AluOperation::iter().collect::<Vec<_>>())
}

/// Generates one operand of every kind, with its value.
fn arb_operand() -> impl Strategy<Value = Operand> {
    prop_oneof![
        arb_register().prop_map(Operand::Register),
        arb_index().prop_map(Operand::IndexRegister),
        any::<u8>().prop_map(Operand::Displacement),
        arb_pair().prop_map(Operand::RegisterPair),
        any::<u8>().prop_map(Operand::Byte),
        any::<u16>().prop_map(Operand::Word),
        prop::sample::select(Condition::iter().collect::<Vec<_>>()).prop_map(Operand::Condition),
        any::<i32>().prop_map(Operand::Relative),
        arb_alu().prop_map(Operand::Alu),
        prop::sample::select(BlockTransfer::iter().collect::<Vec<_>>()).prop_map(Operand::Block),
    ]
}

// ── Naming tables ───────────────────────────────────────────────────────

#[test]
fn names_are_total_and_stable() {
    let names = Register::iter()
        .map(|r| (r.name(), r.name()))
        .chain(IndexRegister::iter().map(|i| (i.name(), i.name())))
        .chain(RegisterPair::iter().map(|p| (p.name(), p.name())))
        .chain(AluOperation::iter().map(|op| (op.name(), op.name())))
        .chain(BlockTransfer::iter().map(|op| (op.name(), op.name())))
        .chain(Condition::iter().map(|c| (c.name(), c.name())));

    for (first, second) in names {
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(first.to_ascii_lowercase(), first);
    }
}

// ── Directive rendering ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn byte_is_two_hex_digits(value in any::<u8>()) {
        let line = format("N", &[Operand::Byte(value)]);
        prop_assert_eq!(line.len(), 4);
        prop_assert!(line.starts_with("0x"));
        prop_assert_eq!(u8::from_str_radix(&line[2..], 16).unwrap(), value);
        prop_assert_eq!(line.to_ascii_lowercase(), line.as_str());
    }

    #[test]
    fn word_is_four_hex_digits(value in any::<u16>()) {
        let line = format("W", &[Operand::Word(value)]);
        prop_assert_eq!(line.len(), 6);
        prop_assert!(line.starts_with("0x"));
        prop_assert_eq!(u16::from_str_radix(&line[2..], 16).unwrap(), value);
        prop_assert_eq!(line.to_ascii_lowercase(), line.as_str());
    }

    #[test]
    fn relative_has_explicit_sign(offset in any::<i32>()) {
        let line = format("D", &[Operand::Relative(offset)]);
        let sign = if offset < 0 { "$-" } else { "$+" };
        prop_assert!(line.starts_with(sign));
        prop_assert_eq!(line[1..].parse::<i32>().unwrap(), offset);
    }

    #[test]
    fn indexed_register_sign_extends(index in arb_index(), displacement in any::<u8>()) {
        let operands = [
            Operand::Register(Register::AtHL),
            Operand::IndexRegister(index),
            Operand::Displacement(displacement),
        ];
        let line = format("R", &operands);

        if index.is_indexed() {
            let expected = std::format!("({}{:+})", index, displacement as i8);
            prop_assert_eq!(line.as_str(), expected.as_str());
        } else {
            prop_assert_eq!(line.as_str(), "(hl)");
        }
    }

    #[test]
    fn plain_register_ignores_index(
        register in arb_register(),
        index in arb_index(),
        displacement in any::<u8>(),
    ) {
        prop_assume!(register != Register::AtHL);
        let operands = [
            Operand::Register(register),
            Operand::IndexRegister(index),
            Operand::Displacement(displacement),
        ];
        let line = format("R", &operands);
        prop_assert_eq!(line.as_str(), register.name());
    }

    #[test]
    fn pair_redirects_only_hl(pair in arb_pair(), index in arb_index()) {
        let line = format("P", &[Operand::RegisterPair(pair), Operand::IndexRegister(index)]);
        if pair == RegisterPair::HL {
            prop_assert_eq!(line.as_str(), index.name());
        } else {
            prop_assert_eq!(line.as_str(), pair.name());
        }
    }

    #[test]
    fn alu_prefix(op in arb_alu(), value in any::<u8>()) {
        let line = format("AN", &[Operand::Alu(op), Operand::Byte(value)]);
        let prefix = if op.is_two_operand() {
            std::format!("{} a,", op)
        } else {
            op.to_string()
        };
        prop_assert!(line.starts_with(&prefix));
        prop_assert_eq!(&line[prefix.len()..], std::format!("0x{:02x}", value));
    }

    #[test]
    fn single_operands_fit_in_a_line(operand in arb_operand()) {
        // Fill in the remaining operands a directive needs with the longest values.
        let (template, operands) = match operand {
            Operand::Register(_) | Operand::IndexRegister(_) | Operand::Displacement(_) => (
                "ld R, N",
                vec![
                    Operand::Register(Register::AtHL),
                    Operand::IndexRegister(IndexRegister::IY),
                    Operand::Displacement(0x80),
                    Operand::Byte(0xFF),
                ],
            ),
            Operand::RegisterPair(pair) => (
                "ld P, W",
                vec![pair.into(), IndexRegister::IX.into(), Operand::Word(0xFFFF)],
            ),
            Operand::Byte(_) => ("out (N), a", vec![operand]),
            Operand::Word(_) => ("call W", vec![operand]),
            Operand::Condition(_) => ("jp C, W", vec![operand, Operand::Word(0xFFFF)]),
            Operand::Relative(_) => ("djnz D", vec![operand]),
            Operand::Alu(_) => (
                "A R",
                vec![
                    operand,
                    Operand::Register(Register::AtHL),
                    Operand::IndexRegister(IndexRegister::IX),
                    Operand::Displacement(0x80),
                ],
            ),
            Operand::Block(_) => ("L", vec![operand]),
        };

        let line = try_format(template, &operands);
        prop_assert!(line.is_ok());
        prop_assert!(line.unwrap().len() <= MAX_LINE_LEN);
    }

    #[test]
    fn mismatched_operand_is_reported(operand in arb_operand()) {
        prop_assume!(operand.kind() != OperandKind::Byte);
        let result = try_format("N", &[operand]);
        prop_assert_eq!(
            result,
            Err(Error::OperandMismatch {
                position: 0,
                expected: OperandKind::Byte,
                found: operand.kind(),
            })
        );
    }
}
