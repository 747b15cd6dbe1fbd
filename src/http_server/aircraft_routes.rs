//! Aircraft HTTP Routes
//!
//! CRUD endpoints for aircraft records; thin consumers of the aircraft
//! service.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::model::{AircraftData, AircraftInput, PageInfo, ServiceDataResult, ServiceListResult};

use super::error::{ApiError, ApiResult};
use super::AppState;

/// Create aircraft routes
pub fn aircraft_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/aircrafts",
            get(list_aircrafts_handler).post(create_aircraft_handler),
        )
        .route(
            "/aircrafts/:code",
            get(get_aircraft_handler)
                .put(update_aircraft_handler)
                .delete(delete_aircraft_handler),
        )
        .with_state(state)
}

/// Rejects malformed pagination with 400 before any query is issued.
pub(super) fn bind_pager(
    pager: Result<Query<PageInfo>, QueryRejection>,
) -> ApiResult<PageInfo> {
    let Query(pager) = pager.map_err(|e| ApiError::InvalidQueryParam(e.body_text()))?;
    if pager.limit.is_some_and(|l| l < 0) {
        return Err(ApiError::InvalidQueryParam(
            "limit must be non-negative".to_string(),
        ));
    }
    if pager.offset.is_some_and(|o| o < 0) {
        return Err(ApiError::InvalidQueryParam(
            "offset must be non-negative".to_string(),
        ));
    }
    Ok(pager)
}

async fn list_aircrafts_handler(
    State(state): State<Arc<AppState>>,
    pager: Result<Query<PageInfo>, QueryRejection>,
) -> ApiResult<Json<ServiceListResult<AircraftData>>> {
    let pager = bind_pager(pager)?;
    let result = state.aircraft.get_aircrafts(&pager).await?;
    Ok(Json(result))
}

async fn get_aircraft_handler(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> ApiResult<Json<ServiceDataResult<AircraftData>>> {
    let result = state.aircraft.get_aircraft_by_code(&code).await?;
    Ok(Json(result))
}

async fn create_aircraft_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AircraftInput>, JsonRejection>,
) -> ApiResult<Json<ServiceDataResult<AircraftData>>> {
    let Json(input) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let result = state.aircraft.create_aircraft(&input).await?;
    Ok(Json(result))
}

async fn update_aircraft_handler(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    body: Result<Json<AircraftInput>, JsonRejection>,
) -> ApiResult<Json<ServiceDataResult<AircraftData>>> {
    let Json(mut input) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    // The path parameter names the record being updated.
    input.code = code;
    let result = state.aircraft.update_aircraft(&input).await?;
    Ok(Json(result))
}

async fn delete_aircraft_handler(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> ApiResult<Json<ServiceDataResult<String>>> {
    let result = state.aircraft.delete_aircraft(&code).await?;
    Ok(Json(result))
}
