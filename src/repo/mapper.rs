//! # Join/Fold Mapper
//!
//! Joins independent result sets in application code: secondary rows are
//! grouped by a shared code and folded into nested fields of the primary
//! items. A primary item whose code has no group keeps `None` for the nested
//! field — "no related rows fetched/matched", distinct from "matched, empty".
//!
//! Single-item lookups wrap the item in a length-1 slice and reuse the same
//! fold, so list and single paths share one implementation.

use std::collections::HashMap;

use crate::model::{AircraftData, AirportData, AirportFlightData, SeatData};

use super::rows::{AircraftRow, AirportRow, FlightRow, SeatTypeRow};

/// Groups rows by a string key, preserving arrival order within each group.
pub fn group_by_key<S, K>(rows: Vec<S>, key_of: K) -> HashMap<String, Vec<S>>
where
    K: Fn(&S) -> &str,
{
    let mut groups: HashMap<String, Vec<S>> = HashMap::new();
    for row in rows {
        let key = key_of(&row).to_string();
        groups.entry(key).or_default().push(row);
    }
    groups
}

/// Folds seat-class aggregates into their aircraft, attaching the per-class
/// breakdown and the derived total seat count.
pub fn map_aircraft_data(
    aircrafts: Vec<AircraftRow>,
    seat_types: Vec<SeatTypeRow>,
) -> Vec<AircraftData> {
    let seat_map = group_by_key(seat_types, |s| &s.code);

    aircrafts
        .into_iter()
        .map(|aircraft| {
            let mut item = AircraftData {
                code: aircraft.code,
                name_ru: aircraft.name_ru,
                name_en: aircraft.name_en,
                range: aircraft.range,
                seat_count: 0,
                seats: None,
            };
            if let Some(group) = seat_map.get(&item.code) {
                let seats: Vec<SeatData> = group
                    .iter()
                    .map(|s| SeatData {
                        seat_type: s.seat_type.clone(),
                        count: s.seat_count,
                    })
                    .collect();
                item.seat_count = seats.iter().map(|s| s.count).sum();
                item.seats = Some(seats);
            }
            item
        })
        .collect()
}

/// Single-item shortcut over [`map_aircraft_data`].
pub fn map_aircraft_item(aircraft: AircraftRow, seat_types: Vec<SeatTypeRow>) -> AircraftData {
    let mut items = map_aircraft_data(vec![aircraft], seat_types);
    items.remove(0)
}

fn flight_data(flight: &FlightRow) -> AirportFlightData {
    AirportFlightData {
        id: flight.id,
        code: flight.code.clone(),
        plan_departure: flight.plan_departure,
        plan_arrival: flight.plan_arrival,
        actual_departure: flight.actual_departure,
        actual_arrival: flight.actual_arrival,
        aircraft_code: flight.aircraft_code.clone(),
        status: flight.status.clone(),
        airport_departure_code: flight.airport_departure_code.clone(),
        airport_arrival_code: flight.airport_arrival_code.clone(),
    }
}

/// Folds last-N departures and arrivals into their airports. Departures are
/// keyed by the departure airport code, arrivals by the arrival airport code.
pub fn map_airport_data(
    airports: Vec<AirportRow>,
    departures: Vec<FlightRow>,
    arrivals: Vec<FlightRow>,
) -> Vec<AirportData> {
    let departure_map = group_by_key(departures, |f| &f.airport_departure_code);
    let arrival_map = group_by_key(arrivals, |f| &f.airport_arrival_code);

    airports
        .into_iter()
        .map(|airport| {
            let mut item = AirportData {
                code: airport.code,
                name_ru: airport.name_ru,
                name_en: airport.name_en,
                city_ru: airport.city_ru,
                city_en: airport.city_en,
                timezone: airport.timezone,
                last_departures: None,
                last_arrivals: None,
            };
            if let Some(group) = departure_map.get(&item.code) {
                item.last_departures = Some(group.iter().map(flight_data).collect());
            }
            if let Some(group) = arrival_map.get(&item.code) {
                item.last_arrivals = Some(group.iter().map(flight_data).collect());
            }
            item
        })
        .collect()
}

/// Single-item shortcut over [`map_airport_data`].
pub fn map_airport_item(
    airport: AirportRow,
    departures: Vec<FlightRow>,
    arrivals: Vec<FlightRow>,
) -> AirportData {
    let mut items = map_airport_data(vec![airport], departures, arrivals);
    items.remove(0)
}
