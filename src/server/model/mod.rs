//! Server application models.
//!
//! Shared application state, the request identity extractor and the target kinds a
//! favorite can point at.

pub mod app;
pub mod favorite;
pub mod identity;
