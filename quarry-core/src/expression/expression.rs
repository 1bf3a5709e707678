use crate::{Comparison, Constant, Field, IntConst, StrConst, ValueConst};
use std::fmt::{self, Display, Formatter};

/// A node of the query expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Field(Field),
    Constant(Constant),
    Comparison(Comparison),
}

impl Expression {
    /// The operand used when a value cannot be expressed, it renders as `<nil>`.
    pub const fn absent() -> Self {
        Expression::Constant(Constant::Value(ValueConst::null()))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Field(v) => v.fmt(f),
            Expression::Constant(v) => v.fmt(f),
            Expression::Comparison(v) => v.fmt(f),
        }
    }
}

impl From<Field> for Expression {
    fn from(value: Field) -> Self {
        Expression::Field(value)
    }
}

impl From<&Field> for Expression {
    fn from(value: &Field) -> Self {
        Expression::Field(value.clone())
    }
}

impl From<Comparison> for Expression {
    fn from(value: Comparison) -> Self {
        Expression::Comparison(value)
    }
}

macro_rules! impl_constant_expression {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for Expression {
                fn from(value: $source) -> Self {
                    Expression::Constant(value.into())
                }
            }
        )+
    };
}
impl_constant_expression!(
    Constant, IntConst, StrConst, ValueConst, i8, i16, i32, i64, u8, u16, u32, &str, String,
);
