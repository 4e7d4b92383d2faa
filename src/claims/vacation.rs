//! Vacation block claims (priority 1).
//!
//! The mid-year school break is subdivided into four alternating sub-periods
//! of 5, 10, 5, and 10 days; the year-end break alternates in strict 7-day
//! chunks from its start through its end.

use chrono::Duration;

use crate::error::EngineResult;
use crate::models::{Assignee, ClaimStore, PriorityClass};
use crate::rules::{mid_year_break, year_end_break};

/// Sub-period lengths of the mid-year break, in days.
const MID_YEAR_PERIODS: [i64; 4] = [5, 10, 5, 10];

/// Emits both vacation blocks for a year.
///
/// Mid-year: the father takes the first sub-period on even years, the mother
/// on odd years, flipping on every sub-period. Days past the block end are
/// dropped silently.
///
/// Year-end: the father takes the first 7-day chunk on odd years, the mother
/// on even years; the last chunk may be shorter than 7 days.
pub fn vacation_claims(year: i32, odd_year: bool, store: &mut ClaimStore) -> EngineResult<()> {
    // Mid-year break: [5, 10, 5, 10] day sub-periods
    let (start, end) = mid_year_break(year)?;
    let first = Assignee::pick(!odd_year, Assignee::Father);

    let mut current = start;
    let mut assignee = first;
    for length in MID_YEAR_PERIODS {
        for _ in 0..length {
            if current > end {
                break;
            }
            store.push(
                current,
                PriorityClass::VacationBlock,
                assignee,
                "Férias Medianas",
            );
            current += Duration::days(1);
        }
        assignee = assignee.other();
    }

    // Year-end break: strict 7-day alternation through the end date
    let (start, end) = year_end_break(year)?;
    let mut assignee = Assignee::pick(odd_year, Assignee::Father);
    let mut current = start;
    let mut chunk_days = 0;

    while current <= end {
        store.push(
            current,
            PriorityClass::VacationBlock,
            assignee,
            "Férias de Ano Novo",
        );
        chunk_days += 1;
        if chunk_days == 7 {
            assignee = assignee.other();
            chunk_days = 0;
        }
        current += Duration::days(1);
    }

    Ok(())
}
