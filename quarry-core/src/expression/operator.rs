use std::fmt::{self, Display, Formatter};

/// Operator tag carried by comparisons and conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    And,
    Or,
}

impl Operator {
    /// The reserved token used in the textual form.
    pub const fn token(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
