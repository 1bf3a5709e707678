use crate::{Expression, Operator, separated_by};
use std::fmt::{self, Display, Formatter};

/// Operator applied to an ordered list of operands, rendered as `lhs OP rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub operator: Operator,
    pub expressions: Vec<Expression>,
}

impl Comparison {
    pub fn new(operator: Operator, expressions: impl IntoIterator<Item = Expression>) -> Self {
        let expressions: Vec<_> = expressions.into_iter().collect();
        debug_assert!(
            expressions.len() >= 2,
            "A comparison needs at least two operands"
        );
        Self {
            operator,
            expressions,
        }
    }
    pub fn operator(&self) -> Operator {
        self.operator
    }
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let separator = format!(" {} ", self.operator);
        separated_by(f, &self.expressions, |f, v| write!(f, "{v}"), &separator)
    }
}
