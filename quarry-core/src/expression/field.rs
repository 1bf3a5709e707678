use crate::{Comparison, Condition, Constant, Equal, Expression, Operator};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

/// Named reference to a column, rendered as `[name]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: Cow<'static, str>,
}

impl Field {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "Field name must not be empty");
        Self { name }
    }
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Equality condition between this field and `value`.
    ///
    /// Integers and text are promoted to constants, fields and constants are used as they are.
    /// Text renders SQL quoted like [`crate::StrConst`], not as a JSON string.
    pub fn equal_to(&self, value: impl Into<Expression>) -> Condition {
        Condition::Equal(Equal {
            comparison: Comparison::new(Operator::Equal, [Expression::from(self), value.into()]),
        })
    }
    pub fn equal_to_int(&self, value: i64) -> Condition {
        self.equal_to(value)
    }
    pub fn equal_to_string(&self, value: impl Into<String>) -> Condition {
        self.equal_to(value.into())
    }
    pub fn equal_to_field(&self, other: &Field) -> Condition {
        self.equal_to(other)
    }

    /// Equality condition against a value only known at runtime.
    ///
    /// The value goes through its JSON data model: integers and strings become constants, any
    /// other shape becomes an absent operand rendered as `<nil>`. Integers above `i64::MAX` keep
    /// their decimal form.
    pub fn equal_to_any<T: Serialize + ?Sized>(&self, value: &T) -> Condition {
        let operand = match serde_json::to_value(value) {
            Ok(JsonValue::Number(n)) => match (n.as_i64(), n.as_u64()) {
                (Some(v), _) => v.into(),
                (None, Some(_)) => Constant::value(n).into(),
                (None, None) => Expression::absent(),
            },
            Ok(JsonValue::String(v)) => Constant::str(v).into(),
            Ok(..) => Expression::absent(),
            Err(e) => {
                log::warn!("Could not serialize the operand compared to {}: {:#}", self, e);
                Expression::absent()
            }
        };
        self.equal_to(operand)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
