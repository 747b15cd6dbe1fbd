//! # Aircraft Repository
//!
//! Per-entity façade over the query layer for `bookings.aircrafts_data`.
//!
//! List and by-code reads issue a primary aircraft query plus a seat-class
//! aggregate over the just-fetched codes (the intentional two-step
//! query-splitting strategy), then fold the result sets together in
//! application code. Independent queries run concurrently via the spawned
//! execution primitives.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio_postgres::types::ToSql;
use tokio_postgres::Client;

use crate::config::DatabaseConfig;
use crate::model::{AircraftData, AircraftInput, PageInfo};
use crate::query::builder::{
    add_group_clause, add_in_clause, add_order_by_clause, add_pagination_clause, add_where_clause,
};
use crate::query::execute::{
    await_result, execute_row_query, execute_rows_query, spawn_row_query, spawn_rows_query,
};
use crate::query::{OrderBy, QueryError, QueryResult, SqlParam};

use super::connect::connect;
use super::mapper::{map_aircraft_data, map_aircraft_item};
use super::rows::{scan_aircraft, scan_count, scan_exists, scan_seat_type, SeatTypeRow};

const QUERY_AIRCRAFTS: &str = "select aircraft_code, model->>'ru', model->>'en', range \
     from bookings.aircrafts_data";
const QUERY_SEAT_TYPES: &str =
    "select aircraft_code, fare_conditions, count(*) from bookings.seats";
const QUERY_TOTAL: &str = "select count(*) from bookings.aircrafts_data";

const CREATE_AIRCRAFT: &str = "insert into bookings.aircrafts_data \
     (\"aircraft_code\", \"model\", \"range\") values ($1, $2, $3)";
const UPDATE_AIRCRAFT: &str = "update bookings.aircrafts_data set \
     \"model\" = \"model\" || jsonb_build_object('en', $2::varchar) \
     || jsonb_build_object('ru', $3::varchar), \"range\" = $4 \
     where \"aircraft_code\" = $1";
const DELETE_AIRCRAFT: &str =
    "delete from bookings.aircrafts_data where \"aircraft_code\" = $1";
const EXISTS_AIRCRAFT: &str =
    "select exists (select 1 from bookings.aircrafts_data where \"aircraft_code\" = $1)";

/// Seam for the service layer; the production implementation is
/// [`PgAircraftRepo`], tests substitute a stub.
pub trait AircraftRepository {
    async fn get_aircraft_items(&self, pager: &PageInfo)
        -> QueryResult<(Vec<AircraftData>, i64)>;
    async fn get_aircraft_by_code(&self, code: &str) -> QueryResult<Option<AircraftData>>;
    async fn exists_by_code(&self, code: &str) -> QueryResult<bool>;
    async fn create_aircraft(&self, input: &AircraftInput)
        -> QueryResult<Option<AircraftData>>;
    async fn update_aircraft(&self, input: &AircraftInput)
        -> QueryResult<Option<AircraftData>>;
    async fn delete_aircraft(&self, code: &str) -> QueryResult<String>;
}

/// PostgreSQL-backed aircraft repository. Acquires a connection per
/// top-level call and releases it on every return path.
#[derive(Debug, Clone)]
pub struct PgAircraftRepo {
    config: DatabaseConfig,
}

impl PgAircraftRepo {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

/// Seat-class aggregate over the given codes, grouped and ordered, spawned
/// on its own task.
fn spawn_seat_query(
    client: Arc<Client>,
    codes: &[String],
) -> oneshot::Receiver<QueryResult<Vec<SeatTypeRow>>> {
    let (query, _) = add_in_clause(QUERY_SEAT_TYPES, codes.len(), "aircraft_code", "WHERE", 1);
    let query = add_group_clause(&query, &["aircraft_code", "fare_conditions"]);
    let query = add_order_by_clause(
        &query,
        &[OrderBy::asc("aircraft_code"), OrderBy::asc("fare_conditions")],
    );
    let params: Vec<SqlParam> = codes
        .iter()
        .map(|c| Box::new(c.clone()) as SqlParam)
        .collect();
    spawn_rows_query(client, query, params, scan_seat_type)
}

impl AircraftRepository for PgAircraftRepo {
    async fn get_aircraft_items(
        &self,
        pager: &PageInfo,
    ) -> QueryResult<(Vec<AircraftData>, i64)> {
        let client = Arc::new(connect(&self.config).await?);

        // Total count is independent of the page, launch it up front.
        let total_rx =
            spawn_row_query(client.clone(), QUERY_TOTAL.to_string(), Vec::new(), scan_count);

        let query = add_order_by_clause(QUERY_AIRCRAFTS, &[OrderBy::asc("aircraft_code")]);
        let (query, args) = add_pagination_clause(&query, pager, 1);
        let params: Vec<&(dyn ToSql + Sync)> =
            args.iter().map(|a| a as &(dyn ToSql + Sync)).collect();
        let aircrafts = execute_rows_query(&client, &query, &params, scan_aircraft)
            .await
            .map_err(|e| e.context("aircraft query"))?;

        let codes: Vec<String> = aircrafts.iter().map(|a| a.code.clone()).collect();
        let seat_types = if codes.is_empty() {
            Vec::new()
        } else {
            let rx = spawn_seat_query(client.clone(), &codes);
            await_result(rx)
                .await
                .map_err(|e| e.context("seat class query"))?
        };

        let items = map_aircraft_data(aircrafts, seat_types);

        let total = await_result(total_rx)
            .await
            .map_err(|e| e.context("aircraft total query"))?
            .unwrap_or(0);

        Ok((items, total))
    }

    async fn get_aircraft_by_code(&self, code: &str) -> QueryResult<Option<AircraftData>> {
        let client = connect(&self.config).await?;

        let (query, _) = add_where_clause(QUERY_AIRCRAFTS, &["aircraft_code"], 1, "WHERE", "AND");
        let aircraft = execute_row_query(&client, &query, &[&code], scan_aircraft)
            .await
            .map_err(|e| e.context("aircraft query"))?;

        let Some(aircraft) = aircraft else {
            return Ok(None);
        };

        let (query, _) = add_in_clause(QUERY_SEAT_TYPES, 1, "aircraft_code", "WHERE", 1);
        let query = add_group_clause(&query, &["aircraft_code", "fare_conditions"]);
        let query = add_order_by_clause(
            &query,
            &[OrderBy::asc("aircraft_code"), OrderBy::asc("fare_conditions")],
        );
        let seat_types = execute_rows_query(&client, &query, &[&aircraft.code], scan_seat_type)
            .await
            .map_err(|e| e.context("seat class query"))?;

        Ok(Some(map_aircraft_item(aircraft, seat_types)))
    }

    async fn exists_by_code(&self, code: &str) -> QueryResult<bool> {
        let client = connect(&self.config).await?;
        let exists = execute_row_query(&client, EXISTS_AIRCRAFT, &[&code], scan_exists)
            .await
            .map_err(|e| e.context("aircraft existence query"))?;
        Ok(exists.unwrap_or(false))
    }

    async fn create_aircraft(
        &self,
        input: &AircraftInput,
    ) -> QueryResult<Option<AircraftData>> {
        let client = connect(&self.config).await?;

        let model = serde_json::json!({ "en": input.name_en, "ru": input.name_ru });
        client
            .execute(CREATE_AIRCRAFT, &[&input.code, &model, &input.range])
            .await
            .map_err(QueryError::Execute)
            .map_err(|e| e.context("create aircraft statement"))?;
        drop(client);

        self.get_aircraft_by_code(&input.code).await
    }

    async fn update_aircraft(
        &self,
        input: &AircraftInput,
    ) -> QueryResult<Option<AircraftData>> {
        let client = connect(&self.config).await?;

        client
            .execute(
                UPDATE_AIRCRAFT,
                &[&input.code, &input.name_en, &input.name_ru, &input.range],
            )
            .await
            .map_err(QueryError::Execute)
            .map_err(|e| e.context("update aircraft statement"))?;
        drop(client);

        self.get_aircraft_by_code(&input.code).await
    }

    async fn delete_aircraft(&self, code: &str) -> QueryResult<String> {
        let client = connect(&self.config).await?;

        client
            .execute(DELETE_AIRCRAFT, &[&code])
            .await
            .map_err(QueryError::Execute)
            .map_err(|e| e.context("delete aircraft statement"))?;

        Ok(code.to_string())
    }
}
