use crate::{GetExpectation, GetResult, SelectExpectation, SelectResult};
use quarry_core::{
    DalError, Database, EmptyReader, Error, IntoFactory, Key, ReadSession, Reader, Record, Result,
    Select,
};
use std::collections::HashMap;

/// What the mock does when asked something it was not programmed for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LookupMiss {
    /// Fail with [`DalError::UnexpectedCall`].
    #[default]
    Fail,
    /// Selects yield no records, gets report [`DalError::RecordNotFound`].
    Empty,
}

/// In memory stand-in for a [`Database`], answering with programmed results.
///
/// Answers are registered up front through [`DbMock::for_select`] and [`DbMock::for_get`],
/// then the mock is handed to the code under test.
#[derive(Debug, Default)]
pub struct DbMock {
    pub(crate) selects: HashMap<String, SelectResult>,
    pub(crate) gets: HashMap<String, GetResult>,
    lookup_miss: LookupMiss,
}

impl DbMock {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn with_lookup_miss(mut self, lookup_miss: LookupMiss) -> Self {
        self.lookup_miss = lookup_miss;
        self
    }
    pub fn lookup_miss(&self) -> LookupMiss {
        self.lookup_miss
    }
    /// Program the answer to the selects reading the same collection as `query`.
    pub fn for_select(&mut self, query: &Select) -> SelectExpectation<'_> {
        SelectExpectation {
            path: query.from.path(),
            mock: self,
        }
    }
    /// Program the answer to the gets of `key`.
    pub fn for_get(&mut self, key: &Key) -> GetExpectation<'_> {
        GetExpectation {
            key: key.to_string(),
            mock: self,
        }
    }

    fn get_one(&self, key: &Key, into: &IntoFactory) -> Result<Record> {
        let Some(result) = self.gets.get(&key.to_string()) else {
            return match self.lookup_miss {
                LookupMiss::Fail => Err(unexpected("get", key.to_string())),
                LookupMiss::Empty => Err(DalError::RecordNotFound.into()),
            };
        };
        result.dispatch(key, into)
    }
}

impl ReadSession for DbMock {
    async fn get(&self, key: &Key, into: &IntoFactory) -> Result<Record> {
        log::debug!("DbMock get {}", key);
        self.get_one(key, into)
    }

    async fn get_multi(&self, keys: &[Key], into: &IntoFactory) -> Result<Vec<Record>> {
        log::debug!("DbMock get of {} keys", keys.len());
        keys.iter().map(|key| self.get_one(key, into)).collect()
    }

    async fn select(&self, query: &Select) -> Result<Box<dyn Reader>> {
        log::debug!("DbMock {}", query);
        let path = query.from.path();
        let Some(result) = self.selects.get(&path) else {
            return match self.lookup_miss {
                LookupMiss::Fail => Err(unexpected("select", path)),
                LookupMiss::Empty => Ok(Box::new(EmptyReader)),
            };
        };
        result.dispatch(query.into.clone())
    }
}

impl Database for DbMock {
    async fn run_readonly_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: AsyncFnOnce(&Self) -> Result<T>,
    {
        f(self).await
    }

    async fn run_readwrite_transaction<T, F>(&self, _f: F) -> Result<T>
    where
        F: AsyncFnOnce(&Self) -> Result<T>,
    {
        let error = DalError::Unsupported("read-write transactions on DbMock");
        log::error!("{}", error);
        Err(error.into())
    }
}

fn unexpected(call: &'static str, target: String) -> Error {
    let error = DalError::UnexpectedCall { call, target };
    log::error!("DbMock: {}", error);
    error.into()
}
