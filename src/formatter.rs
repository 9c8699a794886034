//! Contains the template interpreter that renders decoded operands
//! into a line of assembly text.
//!
//! # Example
//!
//! ```
//! use z80fmt::{format, AluOperation, IndexRegister, InstructionWriter, Operand, Register};
//!
//! // Format an indexed ALU instruction from a template and its operands.
//! let line = format(
//!     "A R",
//!     &[
//!         Operand::Alu(AluOperation::Add),
//!         Operand::Register(Register::AtHL),
//!         Operand::IndexRegister(IndexRegister::IX),
//!         Operand::Displacement(0xFE),
//!     ],
//! );
//! assert_eq!("add a, (ix-2)", line.as_str());
//!
//! // The same instruction, with every operand checked at compile time.
//! let line = InstructionWriter::new()
//!     .alu(AluOperation::Add)
//!     .literal(" ")
//!     .register(Register::AtHL, IndexRegister::IX, 0xFE)
//!     .finish()
//!     .unwrap();
//! assert_eq!("add a, (ix-2)", line.as_str());
//! ```

use crate::buffer::{Line, LineBuffer};
use crate::common::*;
use crate::error::Error;
use crate::operation::{AluOperation, BlockTransfer};
use crate::register::*;
use crate::template::{Directive, Template, TemplatePart};
use log::{error, trace};

/// Receives each rendered line. The line is only borrowed
/// for the duration of the call.
pub trait Sink {
    fn on_output(&mut self, line: &str);
}

impl<F: FnMut(&str)> Sink for F {
    fn on_output(&mut self, line: &str) {
        self(line)
    }
}

fn render_alu(out: &mut LineBuffer, op: AluOperation) -> Result<(), Error> {
    out.push_str(op.name())?;
    if op.is_two_operand() {
        out.push_str(" a,")?;
    }

    Ok(())
}

fn render_register(
    out: &mut LineBuffer,
    register: Register,
    index: IndexRegister,
    displacement: u8,
) -> Result<(), Error> {
    if register != Register::AtHL || !index.is_indexed() {
        return out.push_str(register.name());
    }

    out.push('(')?;
    out.push_str(index.name())?;
    out.push_disp(sign_extend8(displacement))?;
    out.push(')')
}

fn render_relative(out: &mut LineBuffer, offset: i32) -> Result<(), Error> {
    out.push('$')?;
    out.push_disp(offset)
}

/// Walks an operand list front to back on behalf of the template directives.
struct Operands<'a> {
    operands: &'a [Operand],
    position: usize,
}

impl<'a> Operands<'a> {
    fn take(&mut self, expected: OperandKind) -> Result<&'a Operand, Error> {
        let position = self.position;
        let operand =
            self.operands.get(position).ok_or(Error::MissingOperand { position, expected })?;
        self.position += 1;

        Ok(operand)
    }

    fn finish(self) -> Result<(), Error> {
        if self.position < self.operands.len() {
            return Err(Error::UnusedOperands {
                consumed: self.position,
                supplied: self.operands.len(),
            });
        }

        Ok(())
    }
}

/// Takes the next operand, which must be of the given variant.
macro_rules! take {
    ($operands: expr, $variant: ident) => {{
        let position = $operands.position;
        match $operands.take(OperandKind::$variant)? {
            Operand::$variant(value) => *value,
            other => {
                return Err(Error::OperandMismatch {
                    position,
                    expected: OperandKind::$variant,
                    found: other.kind(),
                })
            }
        }
    }};
}

fn render_directive(
    out: &mut LineBuffer,
    directive: Directive,
    operands: &mut Operands<'_>,
) -> Result<(), Error> {
    match directive {
        Directive::Alu => render_alu(out, take!(operands, Alu)),
        Directive::Register => {
            let register = take!(operands, Register);
            let index = take!(operands, IndexRegister);
            let displacement = take!(operands, Displacement);
            render_register(out, register, index, displacement)
        }
        Directive::RegisterPair => {
            let pair = take!(operands, RegisterPair);
            let index = take!(operands, IndexRegister);
            out.push_str(pair.name_with(index))
        }
        Directive::Byte => out.push_u8(take!(operands, Byte)),
        Directive::Word => out.push_u16(take!(operands, Word)),
        Directive::Condition => out.push_str(take!(operands, Condition).name()),
        Directive::Relative => render_relative(out, take!(operands, Relative)),
        Directive::Block => out.push_str(take!(operands, Block).name()),
    }
}

/// Renders a parsed template against an operand list. The list must
/// hold exactly the operands the template's directives consume.
pub fn render(template: &Template<'_>, operands: &[Operand]) -> Result<Line, Error> {
    let mut out = LineBuffer::new();
    let mut operands = Operands { operands, position: 0 };

    for part in template.parts() {
        match *part {
            TemplatePart::Literal(text) => out.push_str(text)?,
            TemplatePart::Directive(directive) => {
                render_directive(&mut out, directive, &mut operands)?
            }
        }
    }

    operands.finish()?;
    let line = out.finish();
    trace!(target: "disas", "{}", line);

    Ok(line)
}

/// Formats one instruction, reporting a broken contract
/// between template and operands as an error.
///
/// The template is interpreted in a single pass over its characters.
pub fn try_format(template: &str, operands: &[Operand]) -> Result<Line, Error> {
    if template.is_empty() {
        return Err(Error::EmptyTemplate);
    }

    let mut out = LineBuffer::new();
    let mut operands = Operands { operands, position: 0 };

    for c in template.chars() {
        match Directive::from_char(c) {
            Some(directive) => render_directive(&mut out, directive, &mut operands)?,
            None => out.push(c)?,
        }
    }

    operands.finish()?;
    let line = out.finish();
    trace!(target: "disas", "{}", line);

    Ok(line)
}

/// Formats one instruction.
///
/// # Panics
///
/// Panics if the operands do not match the template's directives,
/// or if the rendered line exceeds `MAX_LINE_LEN`. Both indicate a
/// defect in the decoder supplying them.
pub fn format(template: &str, operands: &[Operand]) -> Line {
    match try_format(template, operands) {
        Ok(line) => line,
        Err(err) => {
            error!(target: "disas", "cannot format {:?}: {}", template, err);
            panic!("cannot format {:?}: {}", template, err);
        }
    }
}

/// Formats one instruction and delivers it to the sink in a single call.
///
/// # Panics
///
/// Panics under the same conditions as `format`.
pub fn format_to<S: Sink + ?Sized>(template: &str, operands: &[Operand], sink: &mut S) {
    let line = format(template, operands);
    sink.on_output(&line);
}

/// Builds a line directive by directive, with each operand checked at
/// compile time. Overflow is reported by `finish`.
#[derive(Default)]
pub struct InstructionWriter {
    out: LineBuffer,
    error: Option<Error>,
}

impl InstructionWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn write<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut LineBuffer) -> Result<(), Error>,
    {
        if self.error.is_none() {
            self.error = f(&mut self.out).err();
        }

        self
    }

    pub fn literal(self, text: &str) -> Self {
        self.write(|out| out.push_str(text))
    }

    pub fn alu(self, op: AluOperation) -> Self {
        self.write(|out| render_alu(out, op))
    }

    pub fn register(self, register: Register, index: IndexRegister, displacement: u8) -> Self {
        self.write(|out| render_register(out, register, index, displacement))
    }

    pub fn pair(self, pair: RegisterPair, index: IndexRegister) -> Self {
        self.write(|out| out.push_str(pair.name_with(index)))
    }

    pub fn byte(self, value: u8) -> Self {
        self.write(|out| out.push_u8(value))
    }

    pub fn word(self, value: u16) -> Self {
        self.write(|out| out.push_u16(value))
    }

    pub fn condition(self, condition: Condition) -> Self {
        self.write(|out| out.push_str(condition.name()))
    }

    pub fn relative(self, offset: i32) -> Self {
        self.write(|out| render_relative(out, offset))
    }

    pub fn block(self, op: BlockTransfer) -> Self {
        self.write(|out| out.push_str(op.name()))
    }

    pub fn finish(self) -> Result<Line, Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out.finish()),
        }
    }

    /// Finishes the line and delivers it to the sink.
    pub fn write_to<S: Sink + ?Sized>(self, sink: &mut S) -> Result<(), Error> {
        let line = self.finish()?;
        sink.on_output(&line);

        Ok(())
    }
}
