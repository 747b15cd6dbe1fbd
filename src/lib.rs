//! aviaref - aircraft and airport reference data REST service
//!
//! A read-mostly backend over the `bookings` PostgreSQL demo schema. The
//! core is the query composition and result-shaping layer: compositional SQL
//! fragment building, generic row execution (direct or spawned with one-shot
//! result delivery), and application-side folding of independent result sets
//! into denormalized domain objects.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod query;
pub mod repo;
pub mod service;
