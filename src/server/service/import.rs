//! Bulk import of reference data from the catalog.
//!
//! Both importable resources follow the same shape: list one page, fetch each entry's
//! detail document in order, stage a row per entry, then commit the whole page in one
//! transaction. [`CatalogResource`] captures what differs between them.

use std::future::Future;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use serde::de::DeserializeOwned;

use crate::server::{
    catalog::{
        model::{PersonProperties, PlanetProperties},
        CatalogClient,
    },
    data::{people::PeopleRepository, planet::PlanetRepository},
    error::{import::ImportError, Error},
};

/// A catalog resource that can be imported into a local table
pub trait CatalogResource {
    /// Resource path below the catalog base URL
    const PATH: &'static str;
    /// Maximum entries requested from the listing
    const PAGE_LIMIT: u32;
    /// Lowercase plural used in messages, e.g. `people`
    const LABEL: &'static str;

    type Properties: DeserializeOwned + Send + 'static;
    type Record: Send + 'static;

    /// Turn a detail document into an unsaved row
    ///
    /// Properties missing from the document are left unset so the store rejects the row.
    fn stage(properties: Self::Properties, created_at: NaiveDateTime) -> Self::Record;

    /// Insert staged rows within `txn`, returning how many were inserted
    fn persist(
        txn: &DatabaseTransaction,
        staged: Vec<Self::Record>,
    ) -> impl Future<Output = Result<usize, DbErr>> + Send;
}

fn set_or_unset(value: Option<String>) -> ActiveValue<String> {
    value.map_or(ActiveValue::NotSet, ActiveValue::Set)
}

pub struct PeopleResource;

impl CatalogResource for PeopleResource {
    const PATH: &'static str = "people";
    const PAGE_LIMIT: u32 = 300;
    const LABEL: &'static str = "people";

    type Properties = PersonProperties;
    type Record = entity::people::ActiveModel;

    fn stage(properties: PersonProperties, created_at: NaiveDateTime) -> Self::Record {
        entity::people::ActiveModel {
            name: set_or_unset(properties.name),
            height: set_or_unset(properties.height),
            mass: set_or_unset(properties.mass),
            hair_color: set_or_unset(properties.hair_color),
            skin_color: set_or_unset(properties.skin_color),
            eye_color: set_or_unset(properties.eye_color),
            birth_year: set_or_unset(properties.birth_year),
            gender: set_or_unset(properties.gender),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
    }

    async fn persist(
        txn: &DatabaseTransaction,
        staged: Vec<Self::Record>,
    ) -> Result<usize, DbErr> {
        Ok(PeopleRepository::new(txn).create_many(staged).await?.len())
    }
}

pub struct PlanetResource;

impl CatalogResource for PlanetResource {
    const PATH: &'static str = "planets";
    const PAGE_LIMIT: u32 = 60;
    const LABEL: &'static str = "planets";

    type Properties = PlanetProperties;
    type Record = entity::planet::ActiveModel;

    fn stage(properties: PlanetProperties, created_at: NaiveDateTime) -> Self::Record {
        entity::planet::ActiveModel {
            name: set_or_unset(properties.name),
            diameter: set_or_unset(properties.diameter),
            rotation_period: set_or_unset(properties.rotation_period),
            orbital_period: set_or_unset(properties.orbital_period),
            gravity: set_or_unset(properties.gravity),
            population: set_or_unset(properties.population),
            climate: set_or_unset(properties.climate),
            terrain: set_or_unset(properties.terrain),
            surface_water: set_or_unset(properties.surface_water),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
    }

    async fn persist(
        txn: &DatabaseTransaction,
        staged: Vec<Self::Record>,
    ) -> Result<usize, DbErr> {
        Ok(PlanetRepository::new(txn).create_many(staged).await?.len())
    }
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CatalogClient,
}

impl<'a> ImportService<'a> {
    /// Creates a new instance of [`ImportService`]
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CatalogClient) -> Self {
        Self { db, catalog }
    }

    /// Imports the first catalog page of resource `R`
    ///
    /// Detail documents are fetched one after another. Nothing is written until every
    /// fetch succeeded, then all rows are committed together. Rows are never deduplicated
    /// against existing ones, importing twice doubles the table.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of rows inserted, `0` for an empty listing
    /// - `Err(Error::ImportError(ImportError::Fetch))` - A catalog request failed, the store is untouched
    /// - `Err(Error::ImportError(ImportError::Commit))` - The store rejected a row, the page was rolled back
    pub async fn import<R: CatalogResource>(&self) -> Result<usize, Error> {
        let entries = self
            .catalog
            .list(R::PATH, R::PAGE_LIMIT)
            .await
            .map_err(|err| {
                tracing::warn!("Failed to list catalog {}: {}", R::LABEL, err);
                ImportError::Fetch(err)
            })?;

        let created_at = Utc::now().naive_utc();
        let mut staged = Vec::with_capacity(entries.len());

        for entry in entries {
            let properties = self
                .catalog
                .properties::<R::Properties>(&entry.url)
                .await
                .map_err(|err| {
                    tracing::warn!(
                        "Failed to fetch catalog {} entry {}: {}",
                        R::LABEL,
                        entry.url,
                        err
                    );
                    ImportError::Fetch(err)
                })?;

            staged.push(R::stage(properties, created_at));
        }

        let inserted = async {
            let txn = self.db.begin().await?;
            let inserted = R::persist(&txn, staged).await?;
            txn.commit().await?;

            Ok::<_, DbErr>(inserted)
        }
        .await
        .map_err(|source| ImportError::Commit {
            resource: R::LABEL,
            source,
        })?;

        tracing::info!("Imported {} {} from catalog", inserted, R::LABEL);

        Ok(inserted)
    }

    pub async fn import_people(&self) -> Result<usize, Error> {
        self.import::<PeopleResource>().await
    }

    pub async fn import_planets(&self) -> Result<usize, Error> {
        self.import::<PlanetResource>().await
    }
}
