//! Request-side input shapes.

use serde::Deserialize;

/// Pagination bound from two independent optional query parameters.
///
/// Absence means "no limit" / "no offset", not a default page size.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageInfo {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Create/update body for an aircraft record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftInput {
    pub code: String,
    pub name_ru: String,
    pub name_en: String,
    pub range: i32,
}
