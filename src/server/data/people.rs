use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts staged people one row at a time
    ///
    /// Stops at the first rejected row. Pass a transaction as the connection to
    /// discard the rows inserted before it.
    pub async fn create_many(
        &self,
        people: Vec<entity::people::ActiveModel>,
    ) -> Result<Vec<entity::people::Model>, DbErr> {
        let mut created = Vec::with_capacity(people.len());

        for person in people {
            created.push(person.insert(self.db).await?);
        }

        Ok(created)
    }

    /// Gets all people in insertion order
    pub async fn get_all(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, people_id: i32) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find_by_id(people_id)
            .one(self.db)
            .await
    }
}
