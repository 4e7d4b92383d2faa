//! Claim generation for the custody schedule engine.
//!
//! For each year in the requested range this module emits claims for the
//! five claim classes: major fixed dates, the two vacation blocks, common
//! holidays, and the weekend rotation. All claims accumulate into a shared
//! [`ClaimStore`] keyed by absolute date; overlaps are expected and resolved
//! later by the day resolver.
//!
//! The per-year emission order is fixed because it doubles as the tie-break
//! between equal-priority claims on the same date (earliest inserted wins).

mod fixed_events;
mod holidays;
mod vacation;
mod weekends;

pub use fixed_events::major_fixed_claims;
pub use holidays::common_holiday_claims;
pub use vacation::vacation_claims;
pub use weekends::weekend_claims;

use crate::error::{EngineError, EngineResult};
use crate::models::ClaimStore;

/// Returns whether a year is odd.
///
/// Year parity seeds nearly every alternation rule in the agreement.
pub(crate) fn is_odd_year(year: i32) -> bool {
    year.rem_euclid(2) == 1
}

/// Emits all claims for a single year into the store.
///
/// Claims are appended in the agreement's fixed order: major fixed dates,
/// vacation blocks, common holidays, weekends.
pub fn generate_year_claims(year: i32, store: &mut ClaimStore) -> EngineResult<()> {
    let odd_year = is_odd_year(year);
    major_fixed_claims(year, odd_year, store)?;
    vacation_claims(year, odd_year, store)?;
    common_holiday_claims(year, store)?;
    weekend_claims(year, odd_year, store)?;
    Ok(())
}

/// Builds the full claim store for an inclusive year range.
///
/// Fails with [`EngineError::InvalidRange`] when `start_year > end_year`.
/// The store may contain claims just outside the range: the New Year claim
/// of `end_year` lands on January 1 of the following year.
///
/// # Example
///
/// ```
/// use custody_engine::claims::build_claim_store;
///
/// let store = build_claim_store(2025, 2025).unwrap();
/// assert!(store.claimed_days() > 100);
/// ```
pub fn build_claim_store(start_year: i32, end_year: i32) -> EngineResult<ClaimStore> {
    if start_year > end_year {
        return Err(EngineError::InvalidRange {
            start_year,
            end_year,
        });
    }

    let mut store = ClaimStore::new();
    for year in start_year..=end_year {
        generate_year_claims(year, &mut store)?;
    }
    Ok(store)
}
