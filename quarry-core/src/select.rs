use crate::{CollectionRef, Column, Condition, IntoFactory, Target, new_target, separated_by};
use serde_json::Value as JsonValue;
use std::{
    fmt::{self, Debug, Display, Formatter},
    sync::Arc,
};

/// Declarative read query: where to read from, what to keep and how to decode the records.
#[derive(Clone)]
pub struct Select {
    pub from: CollectionRef,
    pub filter: Option<Condition>,
    /// Projected columns, all of them when empty.
    pub columns: Vec<Column>,
    pub limit: Option<u32>,
    /// Creates the target each record is decoded into.
    pub into: IntoFactory,
}

impl Select {
    /// Query reading every record of the collection as generic JSON documents.
    pub fn new(from: CollectionRef) -> Self {
        Self {
            from,
            filter: None,
            columns: Vec::new(),
            limit: None,
            into: new_target::<JsonValue>(),
        }
    }
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = Some(condition);
        self
    }
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
    /// Decode the records into default constructed `T`.
    pub fn decode_into<T: Target + Default>(mut self) -> Self {
        self.into = new_target::<T>();
        self
    }
    pub fn into_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Target> + Send + Sync + 'static,
    {
        self.into = Arc::new(factory);
        self
    }
}

impl Display for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.columns.is_empty() {
            f.write_str("*")?;
        } else {
            separated_by(f, &self.columns, |f, v| write!(f, "{v}"), ", ")?;
        }
        write!(f, " FROM {}", self.from)?;
        if let Some(filter) = self.filter.as_ref().filter(|v| !v.is_empty()) {
            write!(f, " WHERE {filter}")?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        Ok(())
    }
}

impl Debug for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("from", &self.from)
            .field("filter", &self.filter)
            .field("columns", &self.columns)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
