#[cfg(test)]
mod tests {
    use quarry_core::DalError;
    use quarry_mock::{DbMock, GetResult, SelectResult};
    use quarry_tests::{TEST_EMAIL, TEST_USER_ID, TEST_USER_JSON, USERS, init_logs, users};

    #[tokio::test]
    async fn db_mock() {
        init_logs();
        let mut db = DbMock::new();
        db.for_select(&USERS.select_by_email(TEST_EMAIL))
            .returns(SelectResult::single_record(None, TEST_USER_JSON));
        db.for_get(&USERS.key(TEST_USER_ID))
            .returns(GetResult::record(TEST_USER_JSON));
        db.for_get(&USERS.key("missing"))
            .returns(GetResult::error(DalError::RecordNotFound));
        users(&db).await;
    }
}
