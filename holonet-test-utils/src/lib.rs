//! Shared test harness for the holonet workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, fixtures and
//! mock catalog endpoints, then `build()` executes them and hands back a
//! [`TestContext`] holding the in-memory database and the mockito server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_USER_ID, fixtures::catalog::factory, TestBuilder, TestContext, TestError,
    };
}
