//! Low-level row shapes and their scan functions.
//!
//! Scan functions consume one driver row cursor and produce the typed row or
//! a scan error; the execution primitives never know these shapes.

use chrono::{DateTime, Utc};
use tokio_postgres::Row;

/// Primary aircraft row: code, localized names pulled out of the jsonb
/// `model` column, and range.
#[derive(Debug, Clone)]
pub struct AircraftRow {
    pub code: String,
    pub name_ru: String,
    pub name_en: String,
    pub range: i32,
}

pub fn scan_aircraft(row: &Row) -> Result<AircraftRow, tokio_postgres::Error> {
    Ok(AircraftRow {
        code: row.try_get(0)?,
        name_ru: row.try_get(1)?,
        name_en: row.try_get(2)?,
        range: row.try_get(3)?,
    })
}

/// Seat-class aggregate row: one row per (aircraft, fare class).
#[derive(Debug, Clone)]
pub struct SeatTypeRow {
    pub code: String,
    pub seat_type: String,
    pub seat_count: i64,
}

pub fn scan_seat_type(row: &Row) -> Result<SeatTypeRow, tokio_postgres::Error> {
    Ok(SeatTypeRow {
        code: row.try_get(0)?,
        seat_type: row.try_get(1)?,
        seat_count: row.try_get(2)?,
    })
}

/// Primary airport row with names and city pulled out of jsonb columns.
#[derive(Debug, Clone)]
pub struct AirportRow {
    pub code: String,
    pub name_ru: String,
    pub name_en: String,
    pub city_ru: String,
    pub city_en: String,
    pub timezone: String,
}

pub fn scan_airport(row: &Row) -> Result<AirportRow, tokio_postgres::Error> {
    Ok(AirportRow {
        code: row.try_get(0)?,
        name_ru: row.try_get(1)?,
        name_en: row.try_get(2)?,
        city_ru: row.try_get(3)?,
        city_en: row.try_get(4)?,
        timezone: row.try_get(5)?,
    })
}

/// One flight from the last-N window query, tagged with its source half
/// (`departure` or `arrival`) of the UNION ALL.
#[derive(Debug, Clone)]
pub struct FlightRow {
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
    pub source: String,
}

pub fn scan_flight(row: &Row) -> Result<FlightRow, tokio_postgres::Error> {
    Ok(FlightRow {
        id: row.try_get(0)?,
        code: row.try_get(1)?,
        plan_departure: row.try_get(2)?,
        plan_arrival: row.try_get(3)?,
        actual_departure: row.try_get(4)?,
        actual_arrival: row.try_get(5)?,
        aircraft_code: row.try_get(6)?,
        status: row.try_get(7)?,
        airport_departure_code: row.try_get(8)?,
        airport_arrival_code: row.try_get(9)?,
        source: row.try_get(10)?,
    })
}

pub fn scan_count(row: &Row) -> Result<i64, tokio_postgres::Error> {
    row.try_get(0)
}

pub fn scan_exists(row: &Row) -> Result<bool, tokio_postgres::Error> {
    row.try_get(0)
}
