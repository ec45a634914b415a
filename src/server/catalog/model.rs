//! Wire records of the reference catalog.
//!
//! Only the fields the importer reads are declared, anything else in a payload is ignored.
//! Property fields are optional so that a payload missing one still decodes and the
//! gap surfaces when the staged row is committed.

use serde::Deserialize;

/// One page of a resource listing
///
/// `results` is required, a page without it is malformed rather than empty.
#[derive(Debug, Deserialize)]
pub struct ResourceList {
    pub results: Vec<ResourceRef>,
}

/// Listing entry pointing at a resource's detail document
///
/// Only `url` is guaranteed by the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub uid: Option<String>,
    pub name: Option<String>,
    /// Absolute URL of the detail document
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ResourceDetail<T> {
    pub result: ResourceResult<T>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceResult<T> {
    pub properties: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct PersonProperties {
    pub name: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlanetProperties {
    pub name: Option<String>,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
}
