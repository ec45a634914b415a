//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each. They are generic over
//! [`sea_orm::ConnectionTrait`] so callers can hand them either the pooled connection or
//! an open transaction.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
