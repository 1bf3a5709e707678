mod collection;
mod column;
mod condition;
mod constant;
mod error;
mod expression;
mod field_def;
mod key;
mod reader;
mod record;
mod select;
mod session;
mod util;

pub use ::anyhow::Context;
pub use collection::*;
pub use column::*;
pub use condition::*;
pub use constant::*;
pub use error::*;
pub use expression::*;
pub use field_def::*;
pub use key::*;
pub use reader::*;
pub use record::*;
pub use select::*;
pub use session::*;
pub use util::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
