//! HTTP API module for the custody schedule engine.
//!
//! This module provides the REST API endpoints for computing custody
//! schedules and exporting them as iCalendar documents.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::ScheduleRequest;
pub use response::{ApiError, ScheduleResponse};
