//! Contains the directive alphabet of format templates.
//!
//! A template is the text of an instruction with each operand replaced by
//! a single-character directive, such as `"ld P, W"` or `"jr C, D"`.
//! Any character outside the directive alphabet is a literal.
//!
//! # Example
//!
//! ```
//! use z80fmt::{Directive, Template, TemplatePart};
//!
//! let template = Template::parse("jp C, W").unwrap();
//! assert_eq!(2, template.arity());
//! assert_eq!(
//!     &[
//!         TemplatePart::Literal("jp "),
//!         TemplatePart::Directive(Directive::Condition),
//!         TemplatePart::Literal(", "),
//!         TemplatePart::Directive(Directive::Word),
//!     ],
//!     template.parts()
//! );
//! ```

use crate::common::OperandKind;
use crate::error::Error;
use std::fmt;
use strum_macros::EnumIter;

/// Represents a template character that consumes operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Directive {
    Alu,          // A
    Register,     // R
    RegisterPair, // P
    Byte,         // N
    Word,         // W
    Condition,    // C
    Relative,     // D
    Block,        // L
}

impl Directive {
    pub fn from_char(c: char) -> Option<Self> {
        use Directive::*;

        Some(match c {
            'A' => Alu,
            'R' => Register,
            'P' => RegisterPair,
            'N' => Byte,
            'W' => Word,
            'C' => Condition,
            'D' => Relative,
            'L' => Block,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        use Directive::*;

        match self {
            Alu => 'A',
            Register => 'R',
            RegisterPair => 'P',
            Byte => 'N',
            Word => 'W',
            Condition => 'C',
            Relative => 'D',
            Block => 'L',
        }
    }

    /// Lists the kinds of the operands consumed by the directive, in order.
    pub fn operands(self) -> &'static [OperandKind] {
        use crate::common::OperandKind as K;

        match self {
            Directive::Alu => &[K::Alu],
            Directive::Register => &[K::Register, K::IndexRegister, K::Displacement],
            Directive::RegisterPair => &[K::RegisterPair, K::IndexRegister],
            Directive::Byte => &[K::Byte],
            Directive::Word => &[K::Word],
            Directive::Condition => &[K::Condition],
            Directive::Relative => &[K::Relative],
            Directive::Block => &[K::Block],
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Represents a run of literal text or a single directive within a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    Literal(&'a str),
    Directive(Directive),
}

/// Represents a parsed format template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template<'a> {
    parts: Vec<TemplatePart<'a>>,
    arity: usize,
}

impl<'a> Template<'a> {
    /// Splits a template into literal runs and directives.
    pub fn parse(text: &'a str) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::EmptyTemplate);
        }

        let mut parts = Vec::new();
        let mut arity = 0;
        let mut literal_start = 0;

        for (offset, c) in text.char_indices() {
            if let Some(directive) = Directive::from_char(c) {
                if literal_start < offset {
                    parts.push(TemplatePart::Literal(&text[literal_start..offset]));
                }

                parts.push(TemplatePart::Directive(directive));
                arity += directive.operands().len();
                literal_start = offset + c.len_utf8();
            }
        }

        if literal_start < text.len() {
            parts.push(TemplatePart::Literal(&text[literal_start..]));
        }

        Ok(Template { parts, arity })
    }

    pub fn parts(&self) -> &[TemplatePart<'a>] {
        &self.parts
    }

    /// Returns the number of operands the template consumes.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Lists the kinds of every operand the template consumes, in order.
    pub fn operand_kinds(&self) -> impl Iterator<Item = OperandKind> + '_ {
        self.directives().flat_map(|d| d.operands().iter().copied())
    }

    pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Directive(directive) => Some(*directive),
            TemplatePart::Literal(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn directive_chars() {
        for directive in Directive::iter() {
            assert_eq!(Some(directive), Directive::from_char(directive.to_char()));
        }

        assert_eq!(None, Directive::from_char('a'));
        assert_eq!(None, Directive::from_char(','));
        assert_eq!(None, Directive::from_char('B'));
    }

    #[test]
    fn parse_literal_template() {
        let template = Template::parse("nop").unwrap();
        assert_eq!(&[TemplatePart::Literal("nop")], template.parts());
        assert_eq!(0, template.arity());
    }

    #[test]
    fn parse_adjacent_directives() {
        let template = Template::parse("AR").unwrap();
        assert_eq!(
            &[
                TemplatePart::Directive(Directive::Alu),
                TemplatePart::Directive(Directive::Register),
            ],
            template.parts()
        );
        assert_eq!(4, template.arity());
    }

    #[test]
    fn parse_operand_kinds() {
        let template = Template::parse("ld R, N").unwrap();
        let kinds = template.operand_kinds().collect::<Vec<OperandKind>>();
        assert_eq!(
            vec![
                OperandKind::Register,
                OperandKind::IndexRegister,
                OperandKind::Displacement,
                OperandKind::Byte,
            ],
            kinds
        );
    }

    #[test]
    fn parse_empty_template() {
        assert_eq!(Err(Error::EmptyTemplate), Template::parse(""));
    }
}
