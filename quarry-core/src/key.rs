use crate::CollectionRef;
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

/// Identifier of a record inside its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyId {
    Int(i64),
    Str(String),
}

impl Display for KeyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KeyId::Int(v) => write!(f, "{v}"),
            KeyId::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for KeyId {
    fn from(value: i64) -> Self {
        KeyId::Int(value)
    }
}

impl From<&str> for KeyId {
    fn from(value: &str) -> Self {
        KeyId::Str(value.into())
    }
}

impl From<String> for KeyId {
    fn from(value: String) -> Self {
        KeyId::Str(value)
    }
}

/// Location of a record: its collection, its id and optionally the record it is nested under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub parent: Option<Box<Key>>,
    pub collection: Cow<'static, str>,
    pub id: KeyId,
}

impl Key {
    pub fn new(collection: impl Into<Cow<'static, str>>, id: impl Into<KeyId>) -> Self {
        Self {
            parent: None,
            collection: collection.into(),
            id: id.into(),
        }
    }
    /// Key of a record nested under this one.
    pub fn child(&self, collection: impl Into<Cow<'static, str>>, id: impl Into<KeyId>) -> Self {
        Self {
            parent: Some(Box::new(self.clone())),
            ..Key::new(collection, id)
        }
    }
    pub fn collection_ref(&self) -> CollectionRef {
        CollectionRef {
            name: self.collection.clone(),
            parent: self.parent.clone(),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.parent {
            write!(f, "{parent}/")?;
        }
        write!(f, "{}/{}", self.collection, self.id)
    }
}
