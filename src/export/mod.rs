//! Calendar export for resolved schedules.
//!
//! This module turns a resolved schedule into an iCalendar (.ics) document
//! according to RFC 5545.

mod ics;

pub use ics::{generate_filename, generate_ics};
