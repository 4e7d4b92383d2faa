//! Claims and the claim store.
//!
//! A [`Claim`] is a dated request for custody with an associated strength
//! ([`PriorityClass`]) and a human-readable justification. Many claims may
//! target the same date; the [`ClaimStore`] accumulates them all and the
//! resolver later picks one winner per day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Assignee;

/// The strength of a claim. Lower values are stronger.
///
/// The numeric ordering is the tie-break rule during resolution: only the
/// lowest-valued claim on a day survives.
///
/// # Example
///
/// ```
/// use custody_engine::models::PriorityClass;
///
/// assert!(PriorityClass::MajorFixed < PriorityClass::Weekend);
/// assert_eq!(PriorityClass::VacationBlock as u8, 1);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    /// Major fixed dates: Christmas, New Year, holy week, Carnival,
    /// birthdays, Mother's/Father's Day.
    MajorFixed = 0,
    /// Mid-year and year-end school vacation blocks.
    VacationBlock = 1,
    /// Common national/regional holidays.
    CommonHoliday = 2,
    /// The Friday-Saturday-Sunday weekend rotation.
    Weekend = 3,
    /// A day under no special rule. Never emitted as a record.
    DefaultDay = 4,
}

impl std::fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityClass::MajorFixed => write!(f, "major_fixed"),
            PriorityClass::VacationBlock => write!(f, "vacation_block"),
            PriorityClass::CommonHoliday => write!(f, "common_holiday"),
            PriorityClass::Weekend => write!(f, "weekend"),
            PriorityClass::DefaultDay => write!(f, "default_day"),
        }
    }
}

/// A dated custody claim.
///
/// Created once during claim generation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The calendar day the claim targets.
    pub date: NaiveDate,
    /// The strength of the claim.
    pub priority: PriorityClass,
    /// The guardian the claim assigns the day to.
    pub assignee: Assignee,
    /// Human-readable justification, e.g. "Natal" or "FDS".
    pub reason: String,
}

/// Accumulates claims keyed by absolute date.
///
/// Built incrementally, year by year, then treated as read-only during
/// resolution. Claims are keyed by absolute date rather than by year plus
/// offset so that year-spanning claims (New Year touches both Dec 31 and
/// the following Jan 1) merge naturally.
///
/// Insertion order within a date is preserved: the resolver breaks ties
/// between equal-priority claims in favor of the earliest-inserted one.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use custody_engine::models::{Assignee, ClaimStore, PriorityClass};
///
/// let mut store = ClaimStore::new();
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// store.push(christmas, PriorityClass::MajorFixed, Assignee::Father, "Natal");
/// assert_eq!(store.claims_for(christmas).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimStore {
    claims: BTreeMap<NaiveDate, Vec<Claim>>,
}

impl ClaimStore {
    /// Creates an empty claim store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a claim for a date.
    pub fn push(
        &mut self,
        date: NaiveDate,
        priority: PriorityClass,
        assignee: Assignee,
        reason: impl Into<String>,
    ) {
        self.claims.entry(date).or_default().push(Claim {
            date,
            priority,
            assignee,
            reason: reason.into(),
        });
    }

    /// Returns all claims recorded for a date, in insertion order.
    ///
    /// Returns an empty slice for a date with no claims.
    pub fn claims_for(&self, date: NaiveDate) -> &[Claim] {
        self.claims.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of distinct dates with at least one claim.
    pub fn claimed_days(&self) -> usize {
        self.claims.len()
    }

    /// Returns the total number of claims across all dates.
    pub fn total_claims(&self) -> usize {
        self.claims.values().map(Vec::len).sum()
    }
}
