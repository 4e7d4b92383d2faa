//! Alternating-Custody Day-Assignment Engine
//!
//! This crate computes a deterministic custody schedule between two guardians
//! (father/"pai" and mother/"mae") across a multi-year span. Overlapping
//! claims on the same day (major holidays, vacation blocks, common holidays,
//! weekend rotation) are resolved by a fixed priority order, and the resolved
//! schedule can be exported as an iCalendar file or served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod claims;
pub mod error;
pub mod export;
pub mod models;
pub mod resolve;
pub mod rules;
