//! Airport HTTP Routes
//!
//! Read-only endpoints for airport reference data.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::model::{AirportData, PageInfo, ServiceDataResult, ServiceListResult};

use super::aircraft_routes::bind_pager;
use super::error::ApiResult;
use super::AppState;

/// Create airport routes
pub fn airport_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/airports", get(list_airports_handler))
        .route("/airports/:code", get(get_airport_handler))
        .with_state(state)
}

async fn list_airports_handler(
    State(state): State<Arc<AppState>>,
    pager: Result<Query<PageInfo>, QueryRejection>,
) -> ApiResult<Json<ServiceListResult<AirportData>>> {
    let pager = bind_pager(pager)?;
    let result = state.airport.get_airports(&pager).await?;
    Ok(Json(result))
}

async fn get_airport_handler(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> ApiResult<Json<ServiceDataResult<AirportData>>> {
    let result = state.airport.get_airport_by_code(&code).await?;
    Ok(Json(result))
}
