//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` once setup is complete.
//! The context owns an in-memory SQLite database and a mockito server standing in for the
//! external reference catalog.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// Provides access to:
/// - Database connection to an in-memory SQLite database
/// - Base URL of the mock catalog server
/// - Fixture helpers through [`TestContext::user`], [`TestContext::reference`],
///   [`TestContext::favorite`] & [`TestContext::catalog`]
/// - Collection of mock endpoints for assertion
///
/// ```ignore
/// let mut test = TestBuilder::new().with_tables().build().await?;
///
/// test.reference().insert_mock_planet("Tatooine").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for catalog endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database and a fresh mock server.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock catalog, e.g. `http://127.0.0.1:1234`
    pub fn catalog_url(&self) -> String {
        self.server.url()
    }

    /// Execute CREATE TABLE statements against the test database.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Keep a mock created after `build()` alive so `assert_mocks` checks it too.
    pub fn track_mock(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
