//! Test fixture modules for database and HTTP mock creation.
//!
//! - `catalog` - JSON payloads and mock endpoints imitating the external reference catalog
//! - `favorite` - favorite rows linking users to people/planets
//! - `reference` - people & planet rows
//! - `user` - user rows

pub mod catalog;
pub mod favorite;
pub mod reference;
pub mod user;
