//! # HTTP Layer
//!
//! Thin REST surface over the service layer: endpoint registration, JSON
//! binding and status-code mapping.

pub mod aircraft_routes;
pub mod airport_routes;
pub mod error;
pub mod server;

use crate::config::AppConfig;
use crate::repo::{PgAircraftRepo, PgAirportRepo};
use crate::service::{AircraftService, AirportService};

pub use error::{ApiError, ApiResult};
pub use server::HttpServer;

/// Application state shared across handlers
pub struct AppState {
    pub aircraft: AircraftService<PgAircraftRepo>,
    pub airport: AirportService<PgAirportRepo>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            aircraft: AircraftService::new(PgAircraftRepo::new(config.database.clone())),
            airport: AirportService::new(PgAirportRepo::new(config.database.clone())),
        }
    }
}
