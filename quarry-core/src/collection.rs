use crate::Key;
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

/// Handle to a named set of records, possibly nested under a parent record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionRef {
    pub name: Cow<'static, str>,
    pub parent: Option<Box<Key>>,
}

impl CollectionRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            parent: None,
        }
    }
    pub fn with_parent(mut self, parent: Key) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
    /// Slash separated location, `name` for top level collections.
    pub fn path(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{parent}/{}", self.name),
            None => self.name.to_string(),
        }
    }
}

impl Display for CollectionRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Declaration of a collection, usually a struct of field descriptors.
///
/// ```rust,ignore
/// struct Users {
///     email: StringField,
/// }
/// impl Collection for Users {
///     fn collection(&self) -> CollectionRef {
///         CollectionRef::new("users")
///     }
/// }
/// ```
pub trait Collection {
    fn collection(&self) -> CollectionRef;
}
