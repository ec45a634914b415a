use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// The HTTP API never creates users, they are seeded directly into the store.
    /// Fails with a unique constraint violation if `email` is already registered.
    pub async fn create(
        &self,
        fullname: String,
        email: String,
        password: String,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            fullname: ActiveValue::Set(fullname),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Updates a user's name & email, refreshing `updated_at`
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn update(
        &self,
        user_id: i32,
        fullname: String,
        email: String,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user = user.into_active_model();
        user.fullname = ActiveValue::Set(fullname);
        user.email = ActiveValue::Set(email);
        user.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user.update(self.db).await?))
    }
}
