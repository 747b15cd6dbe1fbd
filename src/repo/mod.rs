//! # Repository Layer
//!
//! Per-entity façades combining query building, execution and folding, plus
//! the join/fold mapper and connection acquisition they share.

pub mod aircraft;
pub mod airport;
pub mod connect;
pub mod mapper;
pub mod rows;

pub use aircraft::{AircraftRepository, PgAircraftRepo};
pub use airport::{AirportRepository, PgAirportRepo};
