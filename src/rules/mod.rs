//! Date-rule calculators for the custody schedule engine.
//!
//! This module contains the pure floating-date calculations the claim
//! generator relies on: Easter via the Meeus algorithm and the dates derived
//! from it (Carnival, Corpus Christi, holy week), Nth-weekday-of-month rules
//! for Mother's and Father's Day, and the multi-step boundary rules for the
//! mid-year and year-end school vacation blocks.

mod easter;
mod mid_year_break;
mod nth_weekday;
mod year_end_break;

pub use easter::{carnival, corpus_christi, easter_sunday, holy_week};
pub use mid_year_break::mid_year_break;
pub use nth_weekday::{fathers_day, mothers_day, nth_weekday_of_month, weekdays_of_month};
pub use year_end_break::year_end_break;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Builds a date from components, failing with [`EngineError::InvalidDate`]
/// instead of panicking when the combination does not exist.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::InvalidDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ymd_builds_valid_date() {
        let date = ymd(2025, 12, 25).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
    }

    #[test]
    fn test_ymd_rejects_impossible_date() {
        let err = ymd(2025, 2, 30).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date: 2025-02-30 does not exist");
    }
}
