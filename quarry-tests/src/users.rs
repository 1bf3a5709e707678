use quarry_core::{
    Collection, CollectionRef, Database, Key, Reader, Result, Select, StringField,
    is_no_more_records, is_not_found, new_target,
};
use serde::Deserialize;

pub const TEST_EMAIL: &str = "test@example.com";
pub const TEST_USER_JSON: &str = r#"{"email":"test@example.com"}"#;
pub const TEST_USER_ID: &str = "u1";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct UserData {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Declaration of the `users` collection.
#[derive(Debug)]
pub struct Users {
    pub email: StringField,
    pub name: StringField,
}

pub const USERS: Users = Users {
    email: StringField::new("email"),
    name: StringField::new("name"),
};

impl Collection for Users {
    fn collection(&self) -> CollectionRef {
        CollectionRef::new("users")
    }
}

impl Users {
    pub fn key(&self, id: &str) -> Key {
        Key::new("users", id)
    }
    pub fn select_by_email(&self, email: &str) -> Select {
        Select::new(self.collection())
            .filter(self.email.equal_to_string(email))
            .decode_into::<UserData>()
    }
}

/// Looks a user up by email, `None` when no record matches.
pub async fn find_user_by_email<D: Database>(db: &D, email: &str) -> Result<Option<UserData>> {
    let mut reader = match db.select(&USERS.select_by_email(email)).await {
        Ok(reader) => reader,
        Err(e) if is_not_found(&e) => return Ok(None),
        Err(e) => return Err(e),
    };
    match reader.next() {
        Ok(record) => Ok(Some(record.into_data::<UserData>()?)),
        Err(e) if is_no_more_records(&e) || is_not_found(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Loads a user by id, `None` when the record does not exist.
pub async fn load_user<D: Database>(db: &D, id: &str) -> Result<Option<UserData>> {
    match db.get(&USERS.key(id), &new_target::<UserData>()).await {
        Ok(record) => Ok(Some(record.into_data::<UserData>()?)),
        Err(e) if is_not_found(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Expects the database to hold the test user, reachable by email and by id.
pub async fn users<D: Database>(db: &D) {
    let user = find_user_by_email(db, TEST_EMAIL)
        .await
        .expect("Could not select the user by email")
        .expect("The user selected by email is missing");
    assert_eq!(
        user,
        UserData {
            email: TEST_EMAIL.into(),
            ..Default::default()
        }
    );

    let user = load_user(db, TEST_USER_ID)
        .await
        .expect("Could not load the user by id")
        .expect("The user loaded by id is missing");
    assert_eq!(user.email, TEST_EMAIL);
    let missing = load_user(db, "missing")
        .await
        .expect("Loading a missing user should not fail");
    assert_eq!(missing, None);

    let found = db
        .run_readonly_transaction(async |tx| find_user_by_email(tx, TEST_EMAIL).await)
        .await
        .expect("Could not select the user inside a read only transaction");
    assert!(found.is_some());
}
