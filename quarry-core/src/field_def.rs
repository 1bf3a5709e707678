use crate::{Condition, Field};

/// Descriptor of a text column inside a collection declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringField {
    field: Field,
}

impl StringField {
    pub const fn new(name: &'static str) -> Self {
        Self {
            field: Field::from_static(name),
        }
    }
    pub fn name(&self) -> &str {
        self.field.name()
    }
    pub fn field(&self) -> &Field {
        &self.field
    }
    pub fn equal_to_string(&self, value: impl Into<String>) -> Condition {
        self.field.equal_to_string(value)
    }
}

/// Descriptor of an integer column inside a collection declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntField {
    field: Field,
}

impl IntField {
    pub const fn new(name: &'static str) -> Self {
        Self {
            field: Field::from_static(name),
        }
    }
    pub fn name(&self) -> &str {
        self.field.name()
    }
    pub fn field(&self) -> &Field {
        &self.field
    }
    pub fn equal_to_int(&self, value: i64) -> Condition {
        self.field.equal_to_int(value)
    }
}

impl From<StringField> for Field {
    fn from(value: StringField) -> Self {
        value.field
    }
}

impl From<IntField> for Field {
    fn from(value: IntField) -> Self {
        value.field
    }
}
