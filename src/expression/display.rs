use std::fmt;

use crate::expression::ast::{Expression, Op};

impl fmt::Display for Expression {
    /// Renders the derivation with every composite node parenthesized, so
    /// evaluation order is explicit without precedence rules, e.g.
    /// `((75 - 2) * 9)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Card(value) => write!(f, "{}", value),
            Expression::Add(l, r) => write!(f, "({} {} {})", l, Op::Add.symbol(), r),
            Expression::Sub(l, r) => write!(f, "({} {} {})", l, Op::Sub.symbol(), r),
            Expression::Mul(l, r) => write!(f, "({} {} {})", l, Op::Mul.symbol(), r),
            Expression::Div(l, r) => write!(f, "({} {} {})", l, Op::Div.symbol(), r),
        }
    }
}
