use crate::{DalError, Record, Result, is_no_more_records};

/// Yields the records of a query one at a time.
///
/// The end of the sequence is signaled by returning [`DalError::NoMoreRecords`].
pub trait Reader: Send {
    fn next(&mut self) -> Result<Record>;
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    fn next(&mut self) -> Result<Record> {
        (**self).next()
    }
}

/// Reader that has nothing to yield.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyReader;

impl Reader for EmptyReader {
    fn next(&mut self) -> Result<Record> {
        Err(DalError::NoMoreRecords.into())
    }
}

/// Drain `reader` until the end of the records or until `limit` records are collected.
pub fn select_all<R: Reader + ?Sized>(reader: &mut R, limit: Option<usize>) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    while limit.is_none_or(|limit| records.len() < limit) {
        match reader.next() {
            Ok(record) => records.push(record),
            Err(e) if is_no_more_records(&e) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(records)
}
