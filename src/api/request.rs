//! Request types for the custody schedule API.
//!
//! This module defines the JSON request structure shared by the `/schedule`
//! and `/schedule/ics` endpoints.

use serde::{Deserialize, Serialize};

/// Request body for the schedule endpoints.
///
/// Both years are inclusive; `start_year` must not be after `end_year`.
///
/// # Example
///
/// ```
/// use custody_engine::api::ScheduleRequest;
///
/// let request: ScheduleRequest =
///     serde_json::from_str(r#"{"start_year": 2025, "end_year": 2027}"#).unwrap();
/// assert_eq!(request.start_year, 2025);
/// assert_eq!(request.end_year, 2027);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The first year of the schedule (inclusive).
    pub start_year: i32,
    /// The last year of the schedule (inclusive).
    pub end_year: i32,
}
