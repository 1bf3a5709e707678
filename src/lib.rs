//! Query expressions with a canonical textual form, and a mock data-access layer.
//!
//! ```rust,ignore
//! let users = CollectionRef::new("users");
//! let query = Select::new(users)
//!     .filter(Field::new("email").equal_to("test@example.com"))
//!     .decode_into::<UserData>();
//! assert_eq!(
//!     query.to_string(),
//!     "SELECT * FROM users WHERE [email] == 'test@example.com'"
//! );
//!
//! let mut db = mock::DbMock::new();
//! db.for_select(&query)
//!     .returns(mock::SelectResult::single_record(None, r#"{"email":"test@example.com"}"#));
//! let mut reader = db.select(&query).await?;
//! ```
pub use quarry_core::*;

pub mod mock {
    pub use quarry_mock::*;
}
