//! Transport records serialized to JSON by the HTTP API.
//!
//! Each entity has exactly one outward representation, built with a pure `From`
//! conversion from its database model.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
