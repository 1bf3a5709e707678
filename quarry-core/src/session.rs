use crate::{IntoFactory, Key, Reader, Record, Result, Select};
use std::future::Future;

/// Read access to a data store.
pub trait ReadSession: Send + Sync {
    /// Load the record identified by `key`, fails with [`crate::DalError::RecordNotFound`] if missing.
    fn get(&self, key: &Key, into: &IntoFactory) -> impl Future<Output = Result<Record>> + Send;

    /// Load several records, in the order of `keys`.
    fn get_multi(
        &self,
        keys: &[Key],
        into: &IntoFactory,
    ) -> impl Future<Output = Result<Vec<Record>>> + Send;

    /// Run the query and return a reader over the matching records.
    fn select(&self, query: &Select) -> impl Future<Output = Result<Box<dyn Reader>>> + Send;
}

/// A data store able to run units of work.
pub trait Database: ReadSession {
    /// Run `f` inside a read only transaction.
    fn run_readonly_transaction<T, F>(&self, f: F) -> impl Future<Output = Result<T>>
    where
        F: AsyncFnOnce(&Self) -> Result<T>;

    /// Run `f` inside a transaction that is allowed to write.
    fn run_readwrite_transaction<T, F>(&self, f: F) -> impl Future<Output = Result<T>>
    where
        F: AsyncFnOnce(&Self) -> Result<T>;
}
