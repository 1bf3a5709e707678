use crate::SingleRecordReader;
use quarry_core::{DalError, IntoFactory, Key, Reader, Record, Result};
use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

/// Builds the reader answering a query, given the target factory of that query.
pub type ReaderFactory = Arc<dyn Fn(IntoFactory) -> Box<dyn Reader> + Send + Sync>;

/// Programmed answer to a select: a reader, an error or both.
///
/// When both are present the error is returned and the reader is never built.
#[derive(Clone)]
pub struct SelectResult {
    reader: Option<ReaderFactory>,
    error: Option<DalError>,
}

impl SelectResult {
    /// # Panics
    /// If both `reader` and `error` are `None`, such an answer could never be satisfied.
    pub fn new(reader: Option<ReaderFactory>, error: Option<DalError>) -> Self {
        assert!(
            reader.is_some() || error.is_some(),
            "SelectResult needs a reader factory or an error, got neither"
        );
        Self { reader, error }
    }
    pub fn reader<F>(factory: F) -> Self
    where
        F: Fn(IntoFactory) -> Box<dyn Reader> + Send + Sync + 'static,
    {
        Self::new(Some(Arc::new(factory)), None)
    }
    pub fn error(error: DalError) -> Self {
        Self::new(None, Some(error))
    }
    /// Answer with exactly one record decoded from `raw_json`.
    pub fn single_record(key: Option<Key>, raw_json: impl Into<String>) -> Self {
        let raw_json: Arc<str> = raw_json.into().into();
        Self::reader(move |into| {
            Box::new(SingleRecordReader::new(key.clone(), &*raw_json, into))
        })
    }

    pub(crate) fn dispatch(&self, into: IntoFactory) -> Result<Box<dyn Reader>> {
        match (&self.error, &self.reader) {
            (Some(error), ..) => Err(error.clone().into()),
            (None, Some(reader)) => Ok(reader(into)),
            (None, None) => unreachable!("SelectResult always has a reader or an error"),
        }
    }
}

impl Debug for SelectResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectResult")
            .field("reader", &self.reader.as_ref().map(|_| ".."))
            .field("error", &self.error)
            .finish()
    }
}

/// Programmed answer to a get: the JSON payload of the record or an error.
#[derive(Debug, Clone)]
pub struct GetResult {
    raw_json: Option<String>,
    error: Option<DalError>,
}

impl GetResult {
    /// # Panics
    /// If both `raw_json` and `error` are `None`.
    pub fn new(raw_json: Option<String>, error: Option<DalError>) -> Self {
        assert!(
            raw_json.is_some() || error.is_some(),
            "GetResult needs a payload or an error, got neither"
        );
        Self { raw_json, error }
    }
    pub fn record(raw_json: impl Into<String>) -> Self {
        Self::new(Some(raw_json.into()), None)
    }
    pub fn error(error: DalError) -> Self {
        Self::new(None, Some(error))
    }

    pub(crate) fn dispatch(&self, key: &Key, into: &IntoFactory) -> Result<Record> {
        match (&self.error, &self.raw_json) {
            (Some(error), ..) => Err(error.clone().into()),
            (None, Some(raw)) => Record::decode(Some(key.clone()), raw, into),
            (None, None) => unreachable!("GetResult always has a payload or an error"),
        }
    }
}
