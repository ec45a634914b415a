//! Catalog HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::CATALOG_PAGE,
    fixtures::catalog::{factory, CatalogFixtures},
};

impl<'a> CatalogFixtures<'a> {
    /// Create a mock list endpoint at `/{path}` referencing one entry per properties object.
    ///
    /// Only requests for the first page with exactly `limit` entries match.
    ///
    /// # Arguments
    /// - `path` - Resource path, e.g. `planets`
    /// - `limit` - Page size the importer is expected to request
    /// - `properties` - Properties objects, only used for entry count & names
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_list_endpoint(
        &mut self,
        path: &str,
        limit: u32,
        properties: &[Value],
        expected_requests: usize,
    ) -> Mock {
        let body = factory::resource_list(&self.setup.server.url(), path, properties);

        self.setup
            .server
            .mock("GET", format!("/{}", path).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".to_string(), CATALOG_PAGE.to_string()),
                Matcher::UrlEncoded("limit".to_string(), limit.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock list endpoint at `/{path}` whose `count` entries omit `uid` & `name`.
    pub fn create_url_only_list_endpoint(
        &mut self,
        path: &str,
        limit: u32,
        count: usize,
        expected_requests: usize,
    ) -> Mock {
        let body = factory::url_only_resource_list(&self.setup.server.url(), path, count);

        self.setup
            .server
            .mock("GET", format!("/{}", path).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".to_string(), CATALOG_PAGE.to_string()),
                Matcher::UrlEncoded("limit".to_string(), limit.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock detail endpoint at `/{path}/{uid}` serving the properties object.
    pub fn create_detail_endpoint(
        &mut self,
        path: &str,
        uid: usize,
        properties: Value,
        expected_requests: usize,
    ) -> Mock {
        let body = factory::resource_detail(uid, properties);

        self.setup
            .server
            .mock("GET", format!("/{}/{}", path, uid).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock detail endpoint at `/{path}/{uid}` that responds with an error status.
    pub fn create_failing_detail_endpoint(
        &mut self,
        path: &str,
        uid: usize,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/{}/{}", path, uid).as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create the list endpoint plus one detail endpoint per properties object.
    ///
    /// Every endpoint expects `expected_requests` calls.
    pub fn create_resource_endpoints(
        &mut self,
        path: &str,
        limit: u32,
        properties: Vec<Value>,
        expected_requests: usize,
    ) -> Vec<Mock> {
        let mut mocks = vec![self.create_list_endpoint(
            path,
            limit,
            &properties,
            expected_requests,
        )];

        for (i, props) in properties.into_iter().enumerate() {
            mocks.push(self.create_detail_endpoint(path, i + 1, props, expected_requests));
        }

        mocks
    }
}
