use crate::{Expression, Field};
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

/// A projected expression, optionally renamed.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub expression: Expression,
    /// Output name, empty when the expression is not renamed.
    pub alias: Cow<'static, str>,
}

impl Column {
    pub fn new(expression: impl Into<Expression>) -> Self {
        Self {
            expression: expression.into(),
            alias: Cow::Borrowed(""),
        }
    }
    pub fn alias(mut self, alias: impl Into<Cow<'static, str>>) -> Self {
        self.alias = alias.into();
        self
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)?;
        if !self.alias.is_empty() {
            write!(f, " AS {}", self.alias)?;
        }
        Ok(())
    }
}

/// One column per name, each referencing the field with that name, in the given order.
pub fn columns<I>(names: I) -> Vec<Column>
where
    I: IntoIterator,
    I::Item: Into<Cow<'static, str>>,
{
    names
        .into_iter()
        .map(|name| Column::new(Field::new(name)))
        .collect()
}
