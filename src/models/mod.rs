//! Core data models for the custody schedule engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assignee;
mod claim;
mod resolved_day;

pub use assignee::Assignee;
pub use claim::{Claim, ClaimStore, PriorityClass};
pub use resolved_day::ResolvedDay;
