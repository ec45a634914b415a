//! Outbound client for the public reference catalog.
//!
//! The catalog serves paginated listings at `{base_url}/{path}` whose entries link to
//! detail documents. [`CatalogClient`] fetches both and leaves it to the importer to
//! decide what a resource's properties look like.

pub mod model;

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::server::catalog::model::{ResourceDetail, ResourceList, ResourceRef};

/// First (and only) listing page requested during an import
pub const CATALOG_PAGE: u32 = 1;

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client for `base_url` applying `timeout` to every request
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first listing page of `path` with up to `limit` entries
    ///
    /// # Returns
    /// - `Ok(Vec<ResourceRef>)` - Entries in catalog order, possibly empty
    /// - `Err(reqwest::Error)` - Connection failure, timeout, non-2xx status or undecodable body
    pub async fn list(&self, path: &str, limit: u32) -> Result<Vec<ResourceRef>, reqwest::Error> {
        let url = format!("{}/{}", self.base_url, path);

        let page: ResourceList = self
            .http
            .get(&url)
            .query(&[("page", CATALOG_PAGE), ("limit", limit)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page.results)
    }

    /// Fetch the detail document at `url` and decode its `result.properties`
    pub async fn properties<T: DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        let detail: ResourceDetail<T> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(detail.result.properties)
    }
}
