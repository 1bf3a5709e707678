use crate::Error;
use thiserror::Error as ThisError;

/// Errors defined by the data-access layer.
///
/// `NoMoreRecords` and `RecordNotFound` are sentinels: callers compare against
/// them to drive iteration or detect a miss, they do not signal a malfunction.
/// The enum is `Clone` so that programmed answers can be replayed.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum DalError {
    #[error("no more records")]
    NoMoreRecords,

    #[error("record not found")]
    RecordNotFound,

    #[error("unexpected call {call} for `{target}`")]
    UnexpectedCall { call: &'static str, target: String },

    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    #[error("{0}")]
    Custom(String),
}

impl DalError {
    /// Whether `error` carries this exact `DalError`.
    pub fn matches(&self, error: &Error) -> bool {
        error.downcast_ref::<DalError>() == Some(self)
    }
}

/// True if the error is the "no more records" sentinel.
pub fn is_no_more_records(error: &Error) -> bool {
    DalError::NoMoreRecords.matches(error)
}

/// True if the error is the "record not found" sentinel.
pub fn is_not_found(error: &Error) -> bool {
    DalError::RecordNotFound.matches(error)
}
