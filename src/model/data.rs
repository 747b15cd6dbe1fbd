//! Denormalized domain objects returned to the HTTP layer.
//!
//! Nested collections are `Option<Vec<_>>`: `None` means no related rows were
//! fetched or matched for that entity, which is distinct from "fetched, zero
//! rows". Serialization keeps that distinction (`null` vs `[]`).

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Seat count for one fare class of an aircraft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatData {
    pub seat_type: String,
    pub count: i64,
}

/// Aircraft with its per-class seat breakdown and derived total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftData {
    pub code: String,
    pub name_ru: String,
    pub name_en: String,
    pub range: i32,
    pub seat_count: i64,
    pub seats: Option<Vec<SeatData>>,
}

/// One flight attached to an airport's last-departures/arrivals list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportFlightData {
    pub id: i32,
    pub code: String,
    pub plan_departure: DateTime<Utc>,
    pub plan_arrival: DateTime<Utc>,
    pub actual_departure: Option<DateTime<Utc>>,
    pub actual_arrival: Option<DateTime<Utc>>,
    pub aircraft_code: String,
    pub status: String,
    pub airport_departure_code: String,
    pub airport_arrival_code: String,
}

/// Airport with its most recent departures and arrivals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportData {
    pub code: String,
    pub name_ru: String,
    pub name_en: String,
    pub city_ru: String,
    pub city_en: String,
    pub timezone: String,
    pub last_departures: Option<Vec<AirportFlightData>>,
    pub last_arrivals: Option<Vec<AirportFlightData>>,
}
