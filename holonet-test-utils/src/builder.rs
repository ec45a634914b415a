//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::{Mock, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixtures, and mock catalog endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    users: Vec<i32>,
    people: Vec<String>,
    planets: Vec<String>,
    favorites: Vec<(i32, Option<i32>, Option<i32>)>, // (user_id, people_id, planet_id)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,
    catalog_resources: Vec<(String, u32, Vec<Value>, usize)>, // (path, limit, properties, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            people: Vec::new(),
            planets: Vec::new(),
            favorites: Vec::new(),
            mock_builders: Vec::new(),
            catalog_resources: Vec::new(),
        }
    }

    /// Create every application table: User, People, Planet & Favorite.
    pub fn with_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Use this instead of [`TestBuilder::with_tables`] when a test needs a partial
    /// schema, e.g. to provoke database errors.
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user, see [`UserFixtures::insert_mock_user`](crate::fixtures::user::UserFixtures::insert_mock_user).
    ///
    /// Users get IDs in insertion order starting at 1.
    pub fn with_mock_user(mut self, n: i32) -> Self {
        self.users.push(n);
        self
    }

    /// Insert a mock person. People get IDs in insertion order starting at 1.
    pub fn with_mock_person(mut self, name: impl Into<String>) -> Self {
        self.people.push(name.into());
        self
    }

    /// Insert a mock planet. Planets get IDs in insertion order starting at 1.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a favorite linking `user_id` to a person.
    pub fn with_favorite_person(mut self, user_id: i32, people_id: i32) -> Self {
        self.favorites.push((user_id, Some(people_id), None));
        self
    }

    /// Insert a favorite linking `user_id` to a planet.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorites.push((user_id, None, Some(planet_id)));
        self
    }

    /// Serve a catalog resource: a list endpoint at `/{path}` plus a detail endpoint per entry.
    ///
    /// # Arguments
    /// - `path` - Resource path, e.g. `people`
    /// - `limit` - Page size the list request must ask for
    /// - `properties` - Properties objects served by the detail endpoints, in list order
    /// - `expected_requests` - Number of times each endpoint should be called
    pub fn with_catalog_resource(
        mut self,
        path: impl Into<String>,
        limit: u32,
        properties: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.catalog_resources
            .push((path.into(), limit, properties, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables
    /// 2. Inserts users, people, planets, then favorites
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then catalog resources)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for n in self.users {
            setup.user().insert_mock_user(n).await?;
        }

        for name in self.people {
            setup.reference().insert_mock_person(&name).await?;
        }

        for name in self.planets {
            setup.reference().insert_mock_planet(&name).await?;
        }

        for (user_id, people_id, planet_id) in self.favorites {
            setup
                .favorite()
                .insert_favorite(user_id, people_id, planet_id)
                .await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (path, limit, properties, expected) in self.catalog_resources {
            mocks.extend(
                setup
                    .catalog()
                    .create_resource_endpoints(&path, limit, properties, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks.extend(mocks);

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
