//! Renders decoded Z80 instructions as assembly text.
//!
//! An instruction decoder describes each instruction as a format template,
//! such as `"ld R, N"`, along with the operands its directives consume.
//! The formatter interprets the template and hands one line of text to
//! a caller-supplied sink.

extern crate strum;
extern crate strum_macros;

#[macro_use]
mod common;
mod buffer;
pub mod error;
mod formatter;
pub mod operation;
pub mod register;
pub mod template;

pub use buffer::{Line, LineBuffer, MAX_LINE_LEN};
pub use common::*;
pub use error::Error;
pub use formatter::*;
pub use operation::*;
pub use register::*;
pub use template::{Directive, Template, TemplatePart};
