use quarry_core::{DalError, IntoFactory, Key, Reader, Record, Result};
use std::fmt::{self, Debug, Formatter};

/// Reader serving one record decoded from a JSON document, then reporting the end of the records.
pub struct SingleRecordReader {
    key: Option<Key>,
    raw_json: String,
    into: IntoFactory,
    index: usize,
}

impl SingleRecordReader {
    pub fn new(key: Option<Key>, raw_json: impl Into<String>, into: IntoFactory) -> Self {
        Self {
            key,
            raw_json: raw_json.into(),
            into,
            index: 0,
        }
    }
    /// Key given at construction, the served record does not carry it.
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }
}

impl Reader for SingleRecordReader {
    /// # Panics
    /// On the first call, if the payload is empty.
    fn next(&mut self) -> Result<Record> {
        if self.index > 0 {
            return Err(DalError::NoMoreRecords.into());
        }
        assert!(
            !self.raw_json.is_empty(),
            "SingleRecordReader was given an empty JSON payload"
        );
        // A failed decode leaves the reader fresh
        let record = Record::decode(None, &self.raw_json, &self.into)?;
        self.index += 1;
        Ok(record)
    }
}

impl Debug for SingleRecordReader {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleRecordReader")
            .field("key", &self.key)
            .field("raw_json", &self.raw_json)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
