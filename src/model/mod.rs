//! # Domain Model
//!
//! Wire types: inputs, denormalized data objects and response envelopes.

pub mod data;
pub mod input;
pub mod result;

pub use data::{AircraftData, AirportData, AirportFlightData, SeatData};
pub use input::{AircraftInput, PageInfo};
pub use result::{ServiceDataResult, ServiceListResult, Validation};
