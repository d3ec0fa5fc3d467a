//! Arithmetic expressions over card values

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, Op};
pub use errors::ExpressionError;
