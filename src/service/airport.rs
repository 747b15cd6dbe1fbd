//! # Airport Service
//!
//! Read-only envelope assembly over the airport repository.

use crate::model::{AirportData, PageInfo, ServiceDataResult, ServiceListResult};
use crate::query::QueryResult;
use crate::repo::AirportRepository;

use super::aircraft::log_query_error;

#[derive(Debug, Clone)]
pub struct AirportService<R> {
    repo: R,
}

impl<R: AirportRepository> AirportService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_airports(
        &self,
        pager: &PageInfo,
    ) -> QueryResult<ServiceListResult<AirportData>> {
        let (items, total) = self
            .repo
            .get_airport_items(pager)
            .await
            .map_err(|e| e.context("airport list request"))
            .inspect_err(log_query_error)?;

        Ok(ServiceListResult::ok(items, total))
    }

    pub async fn get_airport_by_code(
        &self,
        code: &str,
    ) -> QueryResult<ServiceDataResult<AirportData>> {
        let data = self
            .repo
            .get_airport_by_code(code)
            .await
            .map_err(|e| e.context("airport by-code request"))
            .inspect_err(log_query_error)?;

        Ok(ServiceDataResult::ok(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryResult;

    struct StubRepo {
        airports: Vec<AirportData>,
    }

    impl AirportRepository for StubRepo {
        async fn get_airport_items(
            &self,
            _pager: &PageInfo,
        ) -> QueryResult<(Vec<AirportData>, i64)> {
            Ok((self.airports.clone(), self.airports.len() as i64))
        }

        async fn get_airport_by_code(
            &self,
            code: &str,
        ) -> QueryResult<Option<AirportData>> {
            Ok(self.airports.iter().find(|a| a.code == code).cloned())
        }

        async fn exists_by_code(&self, code: &str) -> QueryResult<bool> {
            Ok(self.airports.iter().any(|a| a.code == code))
        }
    }

    fn airport(code: &str) -> AirportData {
        AirportData {
            code: code.to_string(),
            name_ru: String::new(),
            name_en: String::new(),
            city_ru: String::new(),
            city_en: String::new(),
            timezone: "Europe/Moscow".to_string(),
            last_departures: None,
            last_arrivals: None,
        }
    }

    #[tokio::test]
    async fn test_list_envelope_carries_total() {
        let service = AirportService::new(StubRepo {
            airports: vec![airport("SVO"), airport("LED")],
        });

        let result = service.get_airports(&PageInfo::default()).await.unwrap();
        assert!(result.result);
        assert_eq!(result.total, 2);
        assert_eq!(result.items.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_by_code_not_found_is_null_data() {
        let service = AirportService::new(StubRepo { airports: vec![] });

        let result = service.get_airport_by_code("???").await.unwrap();
        assert!(result.result);
        assert!(result.data.is_none());
    }
}
