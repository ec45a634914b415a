use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_USER_PASSWORD, error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        fullname: &str,
        email: &str,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                fullname: ActiveValue::Set(fullname.to_string()),
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(TEST_USER_PASSWORD.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user with a name & email derived from `n`, which must be unique per test
    pub async fn insert_mock_user(&self, n: i32) -> Result<entity::user::Model, TestError> {
        self.insert_user(&format!("Test User {}", n), &format!("user{}@holonet.test", n))
            .await
    }
}
