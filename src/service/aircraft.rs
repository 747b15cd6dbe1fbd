//! # Aircraft Service
//!
//! Orchestrates the aircraft repository into response envelopes.
//!
//! Mutations are existence-gated: create declines softly when the code is
//! already taken, update/delete decline softly when it is not. A soft
//! decline is a successful call carrying `result = false` and a message,
//! never an error. Database errors are request-scoped: wrapped and returned
//! to the caller, never fatal to the process.

use crate::model::{AircraftData, AircraftInput, PageInfo, ServiceDataResult, ServiceListResult};
use crate::observability::{Logger, Severity};
use crate::query::QueryResult;
use crate::repo::AircraftRepository;

#[derive(Debug, Clone)]
pub struct AircraftService<R> {
    repo: R,
}

impl<R: AircraftRepository> AircraftService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_aircrafts(
        &self,
        pager: &PageInfo,
    ) -> QueryResult<ServiceListResult<AircraftData>> {
        let (items, total) = self
            .repo
            .get_aircraft_items(pager)
            .await
            .map_err(|e| e.context("aircraft list request"))
            .inspect_err(log_query_error)?;

        Ok(ServiceListResult::ok(items, total))
    }

    pub async fn get_aircraft_by_code(
        &self,
        code: &str,
    ) -> QueryResult<ServiceDataResult<AircraftData>> {
        let data = self
            .repo
            .get_aircraft_by_code(code)
            .await
            .map_err(|e| e.context("aircraft by-code request"))
            .inspect_err(log_query_error)?;

        Ok(ServiceDataResult::ok(data))
    }

    pub async fn create_aircraft(
        &self,
        input: &AircraftInput,
    ) -> QueryResult<ServiceDataResult<AircraftData>> {
        let exists = self
            .repo
            .exists_by_code(&input.code)
            .await
            .map_err(|e| e.context("aircraft existence check"))
            .inspect_err(log_query_error)?;

        if exists {
            return Ok(ServiceDataResult::declined(format!(
                "Aircraft with code '{}' already exists",
                input.code
            )));
        }

        let data = self
            .repo
            .create_aircraft(input)
            .await
            .map_err(|e| e.context("aircraft create request"))
            .inspect_err(log_query_error)?;

        Ok(ServiceDataResult::ok(data))
    }

    pub async fn update_aircraft(
        &self,
        input: &AircraftInput,
    ) -> QueryResult<ServiceDataResult<AircraftData>> {
        let exists = self
            .repo
            .exists_by_code(&input.code)
            .await
            .map_err(|e| e.context("aircraft existence check"))
            .inspect_err(log_query_error)?;

        if !exists {
            return Ok(ServiceDataResult::declined(format!(
                "Aircraft with code '{}' does not exist",
                input.code
            )));
        }

        let data = self
            .repo
            .update_aircraft(input)
            .await
            .map_err(|e| e.context("aircraft update request"))
            .inspect_err(log_query_error)?;

        Ok(ServiceDataResult::ok(data))
    }

    pub async fn delete_aircraft(&self, code: &str) -> QueryResult<ServiceDataResult<String>> {
        let exists = self
            .repo
            .exists_by_code(code)
            .await
            .map_err(|e| e.context("aircraft existence check"))
            .inspect_err(log_query_error)?;

        if !exists {
            return Ok(ServiceDataResult::declined(format!(
                "Aircraft with code '{}' does not exist",
                code
            )));
        }

        let deleted = self
            .repo
            .delete_aircraft(code)
            .await
            .map_err(|e| e.context("aircraft delete request"))
            .inspect_err(log_query_error)?;

        Ok(ServiceDataResult::ok(Some(deleted)))
    }
}

pub(crate) fn log_query_error(err: &crate::query::QueryError) {
    Logger::log_stderr(Severity::Error, "query_failed", &[("error", &err.to_string())]);
}
