//! Response types for the custody schedule API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ResolvedDay;

/// Successful response body for the `/schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The first year of the schedule (inclusive).
    pub start_year: i32,
    /// The last year of the schedule (inclusive).
    pub end_year: i32,
    /// The number of resolved days in the schedule.
    pub total_days: usize,
    /// The resolved days, in ascending date order.
    pub days: Vec<ResolvedDay>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidRange {
                start_year,
                end_year,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    format!(
                        "Invalid year range: start year {} is after end year {}",
                        start_year, end_year
                    ),
                    "start_year must be less than or equal to end_year",
                ),
            },
            EngineError::InvalidDate { year, month, day } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATE_ERROR",
                    "Date construction failed",
                    format!("{:04}-{:02}-{:02} does not exist", year, month, day),
                ),
            },
            EngineError::RuleExhausted { rule, year } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATE_ERROR",
                    "Date rule failed",
                    format!("rule '{}' produced no date for year {}", rule, year),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_range_maps_to_bad_request() {
        let engine_error = EngineError::InvalidRange {
            start_year: 2027,
            end_year: 2025,
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RANGE");
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let engine_error = EngineError::RuleExhausted {
            rule: "year_end_break",
            year: 2025,
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "DATE_ERROR");
    }

    #[test]
    fn test_schedule_response_serialization() {
        let response = ScheduleResponse {
            start_year: 2025,
            end_year: 2025,
            total_days: 0,
            days: vec![],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"start_year\":2025"));
        assert!(json.contains("\"total_days\":0"));
        assert!(json.contains("\"days\":[]"));
    }
}
