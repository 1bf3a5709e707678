use crate::{DbMock, GetResult, SelectResult};

/// Pending registration of the answer to the selects reading a collection.
#[must_use = "the answer is registered only by calling `returns`"]
pub struct SelectExpectation<'m> {
    pub(crate) mock: &'m mut DbMock,
    pub(crate) path: String,
}

impl SelectExpectation<'_> {
    /// Answer with `result`, replacing any previous answer for the same collection.
    pub fn returns(self, result: SelectResult) {
        log::debug!("DbMock will answer selects from `{}` with {:?}", self.path, result);
        self.mock.selects.insert(self.path, result);
    }
}

/// Pending registration of the answer to the gets of a key.
#[must_use = "the answer is registered only by calling `returns`"]
pub struct GetExpectation<'m> {
    pub(crate) mock: &'m mut DbMock,
    pub(crate) key: String,
}

impl GetExpectation<'_> {
    /// Answer with `result`, replacing any previous answer for the same key.
    pub fn returns(self, result: GetResult) {
        log::debug!("DbMock will answer gets of `{}` with {:?}", self.key, result);
        self.mock.gets.insert(self.key, result);
    }
}
