//! # Service Layer
//!
//! Per-entity orchestration: repository calls, soft declines and envelope
//! assembly.

pub mod aircraft;
pub mod airport;

pub use aircraft::AircraftService;
pub use airport::AirportService;
