use std::rc::Rc;

/// A binary operator allowed by the game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Applies the operator to two positive values under the game rules.
    ///
    /// Returns `None` when the combination is disallowed: a subtraction that
    /// does not stay strictly positive, or a division that leaves a
    /// remainder. Invalid combinations are an expected, frequent outcome of
    /// the search and are simply skipped by callers.
    pub fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Op::Add => Some(lhs + rhs),
            Op::Sub => (lhs > rhs).then(|| lhs - rhs),
            Op::Mul => Some(lhs * rhs),
            Op::Div => (rhs != 0 && lhs % rhs == 0).then(|| lhs / rhs),
        }
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

/// An arithmetic derivation of a value: a card literal, or a binary
/// combination of two sub-derivations.
///
/// Children sit behind `Rc` so that frontier states in the solver share
/// subtrees instead of cloning them level by level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Card(u64),
    Add(Rc<Expression>, Rc<Expression>),
    Sub(Rc<Expression>, Rc<Expression>),
    Mul(Rc<Expression>, Rc<Expression>),
    Div(Rc<Expression>, Rc<Expression>),
}

impl Expression {
    /// Builds the binary node for `op` over two sub-derivations.
    pub fn combine(op: Op, lhs: Rc<Expression>, rhs: Rc<Expression>) -> Expression {
        match op {
            Op::Add => Expression::Add(lhs, rhs),
            Op::Sub => Expression::Sub(lhs, rhs),
            Op::Mul => Expression::Mul(lhs, rhs),
            Op::Div => Expression::Div(lhs, rhs),
        }
    }
}
