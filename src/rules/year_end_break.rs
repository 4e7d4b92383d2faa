//! Year-end school vacation boundary rule.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::rules::weekdays_of_month;

/// Computes the year-end school vacation block for a year.
///
/// The block starts on the first Monday on or after December 13. Should the
/// December search come up empty (impossible under the Gregorian calendar,
/// handled anyway), the start falls back to the first Monday of January of
/// the following year. The block ends on the third Sunday of that January,
/// or on the last Sunday found if January somehow has fewer than three.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use custody_engine::rules::year_end_break;
///
/// // Dec 15, 2025 is the first Monday on or after Dec 13
/// let (start, end) = year_end_break(2025).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
pub fn year_end_break(year: i32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let start = (13..=31)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, 12, day))
        .find(|date| date.weekday() == Weekday::Mon);

    let start = match start {
        Some(date) => date,
        None => (1..=7)
            .filter_map(|day| NaiveDate::from_ymd_opt(year + 1, 1, day))
            .find(|date| date.weekday() == Weekday::Mon)
            .ok_or(EngineError::RuleExhausted {
                rule: "year_end_break",
                year,
            })?,
    };

    let sundays = weekdays_of_month(year + 1, 1, Weekday::Sun);
    let end = sundays
        .get(2)
        .or_else(|| sundays.last())
        .copied()
        .ok_or(EngineError::RuleExhausted {
            rule: "year_end_break",
            year,
        })?;

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_known_year_end_breaks() {
        assert_eq!(
            year_end_break(2024).unwrap(),
            (make_date("2024-12-16"), make_date("2025-01-19"))
        );
        assert_eq!(
            year_end_break(2025).unwrap(),
            (make_date("2025-12-15"), make_date("2026-01-18"))
        );
    }

    #[test]
    fn test_start_is_earliest_monday_on_or_after_dec_13() {
        // Dec 13, 2027 is itself a Monday
        let (start, _) = year_end_break(2027).unwrap();
        assert_eq!(start, make_date("2027-12-13"));
    }

    #[test]
    fn test_start_is_always_a_monday_in_search_window() {
        for year in 2020..=2040 {
            let (start, _) = year_end_break(year).unwrap();
            assert_eq!(start.weekday(), Weekday::Mon, "year {}", year);
            assert_eq!(start.month(), 12);
            assert!((13..=19).contains(&start.day()), "year {}: {}", year, start);
        }
    }

    #[test]
    fn test_end_is_third_sunday_of_following_january() {
        for year in 2020..=2040 {
            let (_, end) = year_end_break(year).unwrap();
            assert_eq!(end.weekday(), Weekday::Sun, "year {}", year);
            assert_eq!(end.year(), year + 1);
            assert_eq!(end.month(), 1);
            assert!((15..=21).contains(&end.day()), "year {}: {}", year, end);
        }
    }
}
