use crate::{Error, Key, Result, truncate_long};
use serde::de::DeserializeOwned;
use std::{
    any::{Any, type_name},
    fmt::Debug,
    sync::Arc,
};

/// Value a record payload can be decoded into.
///
/// Implemented for every owned deserializable type, records keep it type erased.
pub trait Target: Any + Debug + Send + Sync {
    /// Replace the content with the one decoded from the JSON document.
    fn decode_json(&mut self, raw: &str) -> Result<()>;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: DeserializeOwned + Debug + Send + Sync + 'static> Target for T {
    fn decode_json(&mut self, raw: &str) -> Result<()> {
        *self = serde_json::from_str(raw)?;
        Ok(())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Produces a fresh target for every record to decode.
pub type IntoFactory = Arc<dyn Fn() -> Box<dyn Target> + Send + Sync>;

/// Factory creating default instances of `T`.
pub fn new_target<T: Target + Default>() -> IntoFactory {
    Arc::new(|| Box::new(T::default()))
}

/// A key with its decoded payload.
#[derive(Debug)]
pub struct Record {
    key: Option<Key>,
    data: Box<dyn Target>,
}

impl Record {
    pub fn new(key: Option<Key>, data: Box<dyn Target>) -> Self {
        Self { key, data }
    }
    /// Decode `raw` into a target created by `into`.
    pub fn decode(key: Option<Key>, raw: &str, into: &IntoFactory) -> Result<Self> {
        let mut data = into();
        data.decode_json(raw)?;
        log::debug!("Decoded {:?} from {}", data, truncate_long(raw));
        Ok(Self::new(key, data))
    }
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }
    /// The payload, if it is a `T`.
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_any().downcast_ref()
    }
    pub fn into_data<T: Any>(self) -> Result<T> {
        self.data
            .into_any()
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::msg(format!("The record data is not a {}", type_name::<T>())))
    }
}
