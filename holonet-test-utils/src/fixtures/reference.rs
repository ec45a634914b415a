//! People & planet row fixtures.
//!
//! Rows are inserted directly rather than through the import workflow, with fixed
//! attribute values so tests only need to care about names and IDs.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn reference<'a>(&'a self) -> ReferenceFixtures<'a> {
        ReferenceFixtures { setup: self }
    }
}

pub struct ReferenceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReferenceFixtures<'a> {
    pub async fn insert_mock_person(&self, name: &str) -> Result<entity::people::Model, TestError> {
        Ok(
            entity::prelude::People::insert(entity::people::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set("172".to_string()),
                mass: ActiveValue::Set("77".to_string()),
                hair_color: ActiveValue::Set("blond".to_string()),
                skin_color: ActiveValue::Set("fair".to_string()),
                eye_color: ActiveValue::Set("blue".to_string()),
                birth_year: ActiveValue::Set("19BBY".to_string()),
                gender: ActiveValue::Set("male".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set("10465".to_string()),
                rotation_period: ActiveValue::Set("23".to_string()),
                orbital_period: ActiveValue::Set("304".to_string()),
                gravity: ActiveValue::Set("1 standard".to_string()),
                population: ActiveValue::Set("200000".to_string()),
                climate: ActiveValue::Set("arid".to_string()),
                terrain: ActiveValue::Set("desert".to_string()),
                surface_water: ActiveValue::Set("1".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
