use crate::{Comparison, Expression, Operator, separated_by};
use std::fmt::{self, Display, Formatter};

/// Boolean predicate usable as the filter of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equal(Equal),
    And(GroupCondition),
    Or(GroupCondition),
}

/// Binary equality, `lhs == rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equal {
    pub comparison: Comparison,
}

impl Equal {
    pub fn lhs(&self) -> Option<&Expression> {
        self.comparison.expressions.first()
    }
    pub fn rhs(&self) -> Option<&Expression> {
        self.comparison.expressions.get(1)
    }
}

/// Conditions joined by the operator of the enclosing [`Condition`] variant.
///
/// A group without conditions is vacuous: it renders as nothing and is skipped inside other groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupCondition {
    pub conditions: Vec<Condition>,
}

impl Condition {
    /// Conjunction of all the conditions.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::And(GroupCondition {
            conditions: conditions.into_iter().collect(),
        })
    }
    /// Disjunction of all the conditions.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Or(GroupCondition {
            conditions: conditions.into_iter().collect(),
        })
    }
    pub fn and(self, other: Condition) -> Self {
        match self {
            Condition::And(mut group) => {
                group.conditions.push(other);
                Condition::And(group)
            }
            v => Condition::all([v, other]),
        }
    }
    pub fn or(self, other: Condition) -> Self {
        match self {
            Condition::Or(mut group) => {
                group.conditions.push(other);
                Condition::Or(group)
            }
            v => Condition::any([v, other]),
        }
    }
    pub fn operator(&self) -> Operator {
        match self {
            Condition::Equal(v) => v.comparison.operator,
            Condition::And(..) => Operator::And,
            Condition::Or(..) => Operator::Or,
        }
    }
    /// True for groups that contain no equality at any depth.
    pub fn is_empty(&self) -> bool {
        match self {
            Condition::Equal(..) => false,
            Condition::And(group) | Condition::Or(group) => {
                group.conditions.iter().all(Condition::is_empty)
            }
        }
    }
    fn is_group(&self) -> bool {
        matches!(self, Condition::And(..) | Condition::Or(..))
    }
}

impl Display for Equal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.comparison)
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Equal(v) => write!(f, "{v}"),
            Condition::And(group) | Condition::Or(group) => {
                let separator = format!(" {} ", self.operator());
                separated_by(
                    f,
                    group.conditions.iter().filter(|v| !v.is_empty()),
                    |f, v| {
                        if v.is_group() {
                            write!(f, "({v})")
                        } else {
                            write!(f, "{v}")
                        }
                    },
                    &separator,
                )
            }
        }
    }
}
