//! Server application core modules.
//!
//! Everything behind the HTTP API: configuration and startup, routing, controllers,
//! services, repositories, the outbound catalog client and the error taxonomy.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
