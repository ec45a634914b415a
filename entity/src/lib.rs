//! SeaORM entities for the holonet store.

pub mod prelude;

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
