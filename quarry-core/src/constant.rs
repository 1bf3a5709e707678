use crate::{Result, separated_by, write_quoted};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt::{self, Display, Formatter, Write};

/// Integer literal, rendered in base 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntConst(i64);

impl IntConst {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Display for IntConst {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text literal, rendered between single quotes with embedded quotes doubled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrConst(String);

impl StrConst {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Display for StrConst {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.0)
    }
}

/// Literal of any shape, captured as its JSON data model.
///
/// Rendering depends on the shape:
/// * null renders as `<nil>`
/// * integers render like [`IntConst`] and strings like [`StrConst`]
/// * everything else uses a generic form that keeps field names, e.g. `{name:Ann age:3}`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueConst(JsonValue);

impl ValueConst {
    pub fn new(value: impl Into<JsonValue>) -> Self {
        Self(value.into())
    }
    pub const fn null() -> Self {
        Self(JsonValue::Null)
    }
    /// Captures any serializable value, structs included.
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self(serde_json::to_value(value)?))
    }
    pub fn value(&self) -> &JsonValue {
        &self.0
    }
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl Display for ValueConst {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            JsonValue::String(v) => write_quoted(f, v),
            v => write_generic(f, v),
        }
    }
}

fn write_generic<W: Write + ?Sized>(out: &mut W, value: &JsonValue) -> fmt::Result {
    match value {
        JsonValue::Null => out.write_str("<nil>"),
        JsonValue::Bool(v) => write!(out, "{v}"),
        JsonValue::Number(v) => write!(out, "{v}"),
        JsonValue::String(v) => out.write_str(v),
        JsonValue::Array(values) => {
            out.write_char('[')?;
            separated_by(out, values, |out, v| write_generic(out, v), " ")?;
            out.write_char(']')
        }
        JsonValue::Object(fields) => {
            out.write_char('{')?;
            separated_by(
                out,
                fields,
                |out, (name, v)| {
                    write!(out, "{name}:")?;
                    write_generic(out, v)
                },
                " ",
            )?;
            out.write_char('}')
        }
    }
}

/// Any literal that can appear in an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Int(IntConst),
    Str(StrConst),
    Value(ValueConst),
}

impl Constant {
    pub const fn int(value: i64) -> Self {
        Constant::Int(IntConst::new(value))
    }
    pub fn str(value: impl Into<String>) -> Self {
        Constant::Str(StrConst::new(value))
    }
    pub fn value(value: impl Into<JsonValue>) -> Self {
        Constant::Value(ValueConst::new(value))
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(v) => v.fmt(f),
            Constant::Str(v) => v.fmt(f),
            Constant::Value(v) => v.fmt(f),
        }
    }
}

impl From<IntConst> for Constant {
    fn from(value: IntConst) -> Self {
        Constant::Int(value)
    }
}

impl From<StrConst> for Constant {
    fn from(value: StrConst) -> Self {
        Constant::Str(value)
    }
}

impl From<ValueConst> for Constant {
    fn from(value: ValueConst) -> Self {
        Constant::Value(value)
    }
}

macro_rules! impl_int_const {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for IntConst {
                fn from(value: $source) -> Self {
                    IntConst::new(value.into())
                }
            }
            impl From<$source> for Constant {
                fn from(value: $source) -> Self {
                    Constant::Int(value.into())
                }
            }
        )+
    };
}
impl_int_const!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Constant {
    fn from(value: &str) -> Self {
        Constant::str(value)
    }
}

impl From<String> for Constant {
    fn from(value: String) -> Self {
        Constant::str(value)
    }
}
