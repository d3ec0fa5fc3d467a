use thiserror::Error;

/// Rule violations detected when re-evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("subtraction {lhs} - {rhs} does not stay strictly positive")]
    NonPositiveDifference { lhs: u64, rhs: u64 },
    #[error("division {lhs} / {rhs} is not exact")]
    InexactDivision { lhs: u64, rhs: u64 },
}
