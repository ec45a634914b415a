//! Reference catalog fixtures.
//!
//! `factory` builds the JSON payloads the catalog serves, `mockito` registers them as
//! endpoints on the test server. List payloads point their `url` fields back at the
//! mock server so detail fetches stay local.

pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a mut TestContext,
}
