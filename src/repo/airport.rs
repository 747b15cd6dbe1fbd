//! # Airport Repository
//!
//! Read-only façade for `bookings.airports_data`. Alongside the primary
//! airport rows it runs a UNION ALL `ROW_NUMBER()` window query giving the
//! last N departures and arrivals per airport, splits the combined rows by
//! their source half, and folds both halves into the airports.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio_postgres::types::ToSql;
use tokio_postgres::Client;

use crate::config::DatabaseConfig;
use crate::model::{AirportData, PageInfo};
use crate::query::builder::{add_in_clause, add_order_by_clause, add_pagination_clause, add_where_clause};
use crate::query::execute::{await_result, execute_row_query, execute_rows_query, spawn_row_query, spawn_rows_query};
use crate::query::{OrderBy, QueryResult, SqlParam};

use super::connect::connect;
use super::mapper::{map_airport_data, map_airport_item};
use super::rows::{scan_airport, scan_count, scan_exists, scan_flight, FlightRow};

const QUERY_AIRPORTS: &str = "select airport_code, airport_name->>'ru', airport_name->>'en', \
     city->>'ru', city->>'en', timezone from bookings.airports_data";
const QUERY_AIRPORTS_TOTAL: &str = "select count(*) from bookings.airports_data";
const EXISTS_AIRPORT: &str =
    "select exists (select 1 from bookings.airports_data where \"airport_code\" = $1)";

const FLIGHTS_DEPARTURE_HEAD: &str = "select fl.*, 'departure' as source, \
     ROW_NUMBER() OVER (PARTITION BY departure_airport ORDER BY actual_departure DESC) as rownum \
     from bookings.flights fl";
const FLIGHTS_ARRIVAL_HEAD: &str = "select fl.*, 'arrival' as source, \
     ROW_NUMBER() OVER (PARTITION BY arrival_airport ORDER BY actual_arrival DESC) as rownum \
     from bookings.flights fl";

/// How many most-recent flights to attach per airport and direction.
const LAST_FLIGHTS: i64 = 10;

/// Seam for the service layer; production implementation is
/// [`PgAirportRepo`].
pub trait AirportRepository {
    async fn get_airport_items(&self, pager: &PageInfo)
        -> QueryResult<(Vec<AirportData>, i64)>;
    async fn get_airport_by_code(&self, code: &str) -> QueryResult<Option<AirportData>>;
    async fn exists_by_code(&self, code: &str) -> QueryResult<bool>;
}

/// PostgreSQL-backed airport repository.
#[derive(Debug, Clone)]
pub struct PgAirportRepo {
    config: DatabaseConfig,
}

impl PgAirportRepo {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

/// Builds the last-N flights window query for `code_count` airport codes.
/// Both halves of the UNION ALL bind the same code list; the final parameter
/// is the per-partition row limit. Returns the query and that last position.
fn build_flights_query(code_count: usize) -> (String, usize) {
    let (departures, next) =
        add_in_clause(FLIGHTS_DEPARTURE_HEAD, code_count, "departure_airport", "WHERE", 1);
    let departures = format!("{departures} AND actual_departure is not null");
    let (arrivals, next) =
        add_in_clause(FLIGHTS_ARRIVAL_HEAD, code_count, "arrival_airport", "WHERE", next);
    let arrivals = format!("{arrivals} AND actual_arrival is not null");

    let query = format!(
        "select flight_id, flight_no, scheduled_departure, scheduled_arrival, \
         actual_departure, actual_arrival, aircraft_code, status, \
         departure_airport, arrival_airport, source \
         from ({departures} union all {arrivals}) fla where fla.rownum <= ${next}"
    );
    (query, next)
}

fn spawn_flights_query(
    client: Arc<Client>,
    codes: &[String],
) -> oneshot::Receiver<QueryResult<Vec<FlightRow>>> {
    let (query, _) = build_flights_query(codes.len());

    let mut params: Vec<SqlParam> = Vec::with_capacity(codes.len() * 2 + 1);
    params.extend(codes.iter().map(|c| Box::new(c.clone()) as SqlParam));
    params.extend(codes.iter().map(|c| Box::new(c.clone()) as SqlParam));
    params.push(Box::new(LAST_FLIGHTS));

    spawn_rows_query(client, query, params, scan_flight)
}

fn split_by_source(flights: Vec<FlightRow>) -> (Vec<FlightRow>, Vec<FlightRow>) {
    flights.into_iter().partition(|f| f.source == "departure")
}

impl AirportRepository for PgAirportRepo {
    async fn get_airport_items(
        &self,
        pager: &PageInfo,
    ) -> QueryResult<(Vec<AirportData>, i64)> {
        let client = Arc::new(connect(&self.config).await?);

        let total_rx = spawn_row_query(
            client.clone(),
            QUERY_AIRPORTS_TOTAL.to_string(),
            Vec::new(),
            scan_count,
        );

        let query = add_order_by_clause(QUERY_AIRPORTS, &[OrderBy::asc("airport_code")]);
        let (query, args) = add_pagination_clause(&query, pager, 1);
        let params: Vec<&(dyn ToSql + Sync)> =
            args.iter().map(|a| a as &(dyn ToSql + Sync)).collect();
        let airports = execute_rows_query(&client, &query, &params, scan_airport)
            .await
            .map_err(|e| e.context("airport query"))?;

        let codes: Vec<String> = airports.iter().map(|a| a.code.clone()).collect();
        let (departures, arrivals) = if codes.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            let rx = spawn_flights_query(client.clone(), &codes);
            let flights = await_result(rx)
                .await
                .map_err(|e| e.context("airport flights query"))?;
            split_by_source(flights)
        };

        let total = await_result(total_rx)
            .await
            .map_err(|e| e.context("airport total query"))?
            .unwrap_or(0);

        let items = map_airport_data(airports, departures, arrivals);

        Ok((items, total))
    }

    async fn get_airport_by_code(&self, code: &str) -> QueryResult<Option<AirportData>> {
        let client = Arc::new(connect(&self.config).await?);

        // The flights query only needs the known code, so both queries run
        // concurrently; consumption order is the caller's choice.
        let (query, _) = add_where_clause(QUERY_AIRPORTS, &["airport_code"], 1, "WHERE", "AND");
        let airport_rx = spawn_row_query(
            client.clone(),
            query,
            vec![Box::new(code.to_string()) as SqlParam],
            scan_airport,
        );
        let flights_rx = spawn_flights_query(client.clone(), &[code.to_string()]);

        let airport = await_result(airport_rx)
            .await
            .map_err(|e| e.context("airport query"))?;
        let Some(airport) = airport else {
            return Ok(None);
        };

        let flights = await_result(flights_rx)
            .await
            .map_err(|e| e.context("airport flights query"))?;
        let (departures, arrivals) = split_by_source(flights);

        Ok(Some(map_airport_item(airport, departures, arrivals)))
    }

    async fn exists_by_code(&self, code: &str) -> QueryResult<bool> {
        let client = connect(&self.config).await?;
        let exists = execute_row_query(&client, EXISTS_AIRPORT, &[&code], scan_exists)
            .await
            .map_err(|e| e.context("airport existence query"))?;
        Ok(exists.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flights_query_parameter_positions() {
        let (query, limit_param) = build_flights_query(2);
        assert!(query.contains("(\"departure_airport\" IN ($1, $2))"));
        assert!(query.contains("(\"arrival_airport\" IN ($3, $4))"));
        assert!(query.ends_with("fla.rownum <= $5"));
        assert_eq!(limit_param, 5);
    }

    #[test]
    fn test_flights_query_single_code() {
        let (query, limit_param) = build_flights_query(1);
        assert!(query.contains("IN ($1)"));
        assert!(query.contains("IN ($2)"));
        assert_eq!(limit_param, 3);
    }
}
