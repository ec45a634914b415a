//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the repositories. They own transaction
//! boundaries, turn missing rows into domain errors and map database models into the
//! transport records of [`crate::model`].

pub mod favorite;
pub mod import;
pub mod reference;
pub mod user;
