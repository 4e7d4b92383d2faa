//! Weekend rotation claims (priority 3).
//!
//! Friday-Saturday-Sunday triples every 7 days, starting from the first
//! Friday of the year.

use chrono::{Datelike, Duration, Weekday};

use crate::error::EngineResult;
use crate::models::{Assignee, ClaimStore, PriorityClass};
use crate::rules::ymd;

/// Emits all [`PriorityClass::Weekend`] claims for a year.
///
/// The first weekend block belongs to the father on odd years. On even years
/// the very first block is skipped entirely — no claim is emitted for those
/// three days — and the rotation starts at the second block with the mother.
/// The assignee flips after every block, and only dates inside `year` are
/// emitted: a block spanning into the next year is truncated at the boundary.
pub fn weekend_claims(year: i32, odd_year: bool, store: &mut ClaimStore) -> EngineResult<()> {
    let first_block_father = odd_year;

    // First Friday of the year
    let mut block_start = ymd(year, 1, 1)?;
    while block_start.weekday() != Weekday::Fri {
        block_start += Duration::days(1);
    }

    // Even years skip the first block; the rotation starts at the second
    if !first_block_father {
        block_start += Duration::days(7);
    }

    let mut assignee = Assignee::pick(first_block_father, Assignee::Father);

    while block_start.year() == year {
        for offset in 0..3 {
            let date = block_start + Duration::days(offset);
            if date.year() == year {
                store.push(date, PriorityClass::Weekend, assignee, "FDS");
            }
        }
        block_start += Duration::days(7);
        assignee = assignee.other();
    }

    Ok(())
}
