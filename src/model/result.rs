//! Generic service response envelopes.
//!
//! `result = false` with a populated `message`/`validations` signals a
//! declined or failed operation; a soft business decline (duplicate key on
//! create, missing key on update/delete) is a normal, non-error result.

use serde::Serialize;

/// A single validation message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub property: Option<String>,
    pub message: String,
}

impl Validation {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            property: None,
            message: message.into(),
        }
    }
}

/// Single-item envelope: item, absence, or decline
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDataResult<T> {
    pub result: bool,
    pub message: String,
    pub validations: Option<Vec<Validation>>,
    pub code: Option<String>,
    pub data: Option<T>,
}

impl<T> ServiceDataResult<T> {
    /// Successful call; `data` may still be `None` for a not-found lookup.
    pub fn ok(data: Option<T>) -> Self {
        Self {
            result: true,
            message: String::new(),
            validations: None,
            code: None,
            data,
        }
    }

    /// Soft business decline: a successful call carrying `result = false`.
    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            result: false,
            message: message.into(),
            validations: None,
            code: None,
            data: None,
        }
    }

    /// Failure envelope with validation detail, used by the HTTP layer.
    pub fn failed(message: impl Into<String>, validations: Vec<Validation>) -> Self {
        Self {
            result: false,
            message: message.into(),
            validations: Some(validations),
            code: None,
            data: None,
        }
    }
}

/// List envelope: items plus the unpaginated total
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListResult<T> {
    pub result: bool,
    pub message: String,
    pub validations: Option<Vec<Validation>>,
    pub code: Option<String>,
    pub total: i64,
    pub items: Option<Vec<T>>,
}

impl<T> ServiceListResult<T> {
    pub fn ok(items: Vec<T>, total: i64) -> Self {
        Self {
            result: true,
            message: String::new(),
            validations: None,
            code: None,
            total,
            items: Some(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_serialization() {
        let envelope = ServiceDataResult::ok(Some(7));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["result"], true);
        assert_eq!(json["data"], 7);
        assert!(json["validations"].is_null());
    }

    #[test]
    fn test_not_found_keeps_result_true() {
        let envelope = ServiceDataResult::<i32>::ok(None);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["result"], true);
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_declined_envelope() {
        let envelope = ServiceDataResult::<i32>::declined("already exists");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["result"], false);
        assert_eq!(json["message"], "already exists");
        assert!(json["validations"].is_null());
    }

    #[test]
    fn test_list_envelope_total() {
        let envelope = ServiceListResult::ok(vec![1, 2], 9);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["total"], 9);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }
}
