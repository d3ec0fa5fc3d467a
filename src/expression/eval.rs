use crate::expression::ast::{Expression, Op};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Recomputes the value of the derivation, re-checking every
    /// intermediate operation against the game rules.
    ///
    /// The search engines never build an illegal node, so on their output
    /// this always succeeds; it exists so that a reported solution can be
    /// verified independently of the search.
    ///
    /// # Errors
    ///
    /// Returns an error when a subtraction does not stay strictly positive
    /// or a division leaves a remainder.
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        match self {
            Expression::Card(value) => Ok(*value),
            Expression::Add(l, r) => Ok(l.evaluate()? + r.evaluate()?),
            Expression::Mul(l, r) => Ok(l.evaluate()? * r.evaluate()?),
            Expression::Sub(l, r) => {
                let (lhs, rhs) = (l.evaluate()?, r.evaluate()?);
                Op::Sub
                    .apply(lhs, rhs)
                    .ok_or(ExpressionError::NonPositiveDifference { lhs, rhs })
            }
            Expression::Div(l, r) => {
                let (lhs, rhs) = (l.evaluate()?, r.evaluate()?);
                Op::Div
                    .apply(lhs, rhs)
                    .ok_or(ExpressionError::InexactDivision { lhs, rhs })
            }
        }
    }
}
