//! Day resolution: picking one winning claim per day.
//!
//! Once the [`ClaimStore`] holds every claim for the requested range, the
//! resolver walks each day, keeps the strongest claim, and emits a
//! [`ResolvedDay`] for every day under at least a weekend-level rule.

use chrono::Duration;
use tracing::info;

use crate::claims::build_claim_store;
use crate::error::{EngineError, EngineResult};
use crate::models::{Claim, ClaimStore, PriorityClass, ResolvedDay};
use crate::rules::ymd;

/// Picks the winning claim from a day's bucket.
///
/// The winner is the minimum-priority claim; ties go to the earliest
/// inserted, which is why the claim generator's emission order is fixed.
fn winning_claim(claims: &[Claim]) -> Option<&Claim> {
    claims.iter().reduce(|best, claim| {
        if claim.priority < best.priority {
            claim
        } else {
            best
        }
    })
}

/// Resolves every day from January 1 of `start_year` through December 31 of
/// `end_year` inclusive, in ascending date order.
///
/// Days whose winning claim is [`PriorityClass::Weekend`] or stronger yield
/// exactly one [`ResolvedDay`]. Unclaimed days are default days and produce
/// no record at all — the original agreement had a disabled "mother by
/// default" fallback for them, which stays disabled here.
///
/// Resolution is fully deterministic: the same range always yields the same
/// sequence.
pub fn resolve_range(
    store: &ClaimStore,
    start_year: i32,
    end_year: i32,
) -> EngineResult<Vec<ResolvedDay>> {
    if start_year > end_year {
        return Err(EngineError::InvalidRange {
            start_year,
            end_year,
        });
    }

    let range_start = ymd(start_year, 1, 1)?;
    let range_end = ymd(end_year, 12, 31)?;

    let mut days = Vec::new();
    let mut current = range_start;
    while current <= range_end {
        if let Some(winner) = winning_claim(store.claims_for(current)) {
            if winner.priority <= PriorityClass::Weekend {
                days.push(ResolvedDay {
                    date: current,
                    assignee: winner.assignee,
                    reason: winner.reason.clone(),
                    priority: winner.priority,
                });
            }
        }
        current += Duration::days(1);
    }

    Ok(days)
}

/// Runs the full pipeline: claim generation followed by day resolution.
///
/// # Example
///
/// ```
/// use custody_engine::resolve::generate_schedule;
///
/// let schedule = generate_schedule(2025, 2025).unwrap();
/// assert!(!schedule.is_empty());
/// assert!(schedule.windows(2).all(|pair| pair[0].date < pair[1].date));
/// ```
pub fn generate_schedule(start_year: i32, end_year: i32) -> EngineResult<Vec<ResolvedDay>> {
    let store = build_claim_store(start_year, end_year)?;
    let schedule = resolve_range(&store, start_year, end_year)?;
    info!(
        start_year,
        end_year,
        claimed_days = store.claimed_days(),
        resolved_days = schedule.len(),
        "Resolved custody schedule"
    );
    Ok(schedule)
}
