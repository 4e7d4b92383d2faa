//! HTTP request handlers for the custody schedule API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::export::generate_ics;
use crate::resolve::generate_schedule;

use super::request::ScheduleRequest;
use super::response::{ApiError, ApiErrorResponse, ScheduleResponse};

/// Creates the API router with all endpoints.
///
/// The rules are hard-coded, so the router carries no shared state.
pub fn create_router() -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .route("/schedule/ics", post(schedule_ics_handler))
}

/// Handler for the POST /schedule endpoint.
///
/// Accepts a year range and returns the resolved schedule as JSON.
async fn schedule_handler(
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match generate_schedule(request.start_year, request.end_year) {
        Ok(days) => {
            info!(
                correlation_id = %correlation_id,
                start_year = request.start_year,
                end_year = request.end_year,
                total_days = days.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Schedule resolved"
            );
            let response = ScheduleResponse {
                start_year: request.start_year,
                end_year: request.end_year,
                total_days: days.len(),
                days,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Schedule resolution failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the POST /schedule/ics endpoint.
///
/// Accepts a year range and returns the resolved schedule as an RFC 5545
/// iCalendar document.
async fn schedule_ics_handler(
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match generate_schedule(request.start_year, request.end_year) {
        Ok(days) => {
            let ics = generate_ics(&days, request.start_year, request.end_year);
            info!(
                correlation_id = %correlation_id,
                start_year = request.start_year,
                end_year = request.end_year,
                total_days = days.len(),
                "Schedule exported as ICS"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/calendar; charset=utf-8")],
                ics,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Schedule export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Unwraps the JSON payload, mapping axum rejections to API errors.
fn parse_request(
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<ScheduleRequest, axum::response::Response> {
    info!(correlation_id = %correlation_id, "Processing schedule request");
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}
