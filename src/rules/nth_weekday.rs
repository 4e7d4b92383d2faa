//! Nth-weekday-of-month rules.
//!
//! Generic weekday search helpers plus the two fixed commemorations that use
//! them: Mother's Day (2nd Sunday of May) and Father's Day (2nd Sunday of
//! August, the Brazilian date).

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Finds the nth occurrence of a weekday in a month.
///
/// `n` is one-based. Returns `None` when the month has fewer than `n`
/// occurrences of the weekday (or the month itself is invalid).
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use custody_engine::rules::nth_weekday_of_month;
///
/// // 2nd Sunday of May 2025
/// let date = nth_weekday_of_month(2025, 5, Weekday::Sun, 2).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 5, 11).unwrap());
/// ```
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let mut date = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut count = 0;

    while date.month() == month {
        if date.weekday() == weekday {
            count += 1;
            if count == n {
                return Some(date);
            }
        }
        date += Duration::days(1);
    }
    None
}

/// Collects every occurrence of a weekday in a month, in ascending order.
pub fn weekdays_of_month(year: i32, month: u32, weekday: Weekday) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let Some(mut date) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return dates;
    };

    while date.month() == month {
        if date.weekday() == weekday {
            dates.push(date);
        }
        date += Duration::days(1);
    }
    dates
}

/// Mother's Day: the 2nd Sunday of May.
pub fn mothers_day(year: i32) -> EngineResult<NaiveDate> {
    nth_weekday_of_month(year, 5, Weekday::Sun, 2).ok_or(EngineError::RuleExhausted {
        rule: "mothers_day",
        year,
    })
}

/// Father's Day: the 2nd Sunday of August.
pub fn fathers_day(year: i32) -> EngineResult<NaiveDate> {
    nth_weekday_of_month(year, 8, Weekday::Sun, 2).ok_or(EngineError::RuleExhausted {
        rule: "fathers_day",
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_first_weekday_of_month() {
        // May 2025 starts on a Thursday; first Sunday is May 4
        let date = nth_weekday_of_month(2025, 5, Weekday::Sun, 1).unwrap();
        assert_eq!(date, make_date("2025-05-04"));
    }

    #[test]
    fn test_fifth_occurrence_when_present() {
        // June 2025 has five Mondays: 2, 9, 16, 23, 30
        let date = nth_weekday_of_month(2025, 6, Weekday::Mon, 5).unwrap();
        assert_eq!(date, make_date("2025-06-30"));
    }

    #[test]
    fn test_missing_occurrence_returns_none() {
        // February 2025 has only four Fridays
        assert!(nth_weekday_of_month(2025, 2, Weekday::Fri, 5).is_none());
    }

    #[test]
    fn test_invalid_month_returns_none() {
        assert!(nth_weekday_of_month(2025, 13, Weekday::Mon, 1).is_none());
    }

    #[test]
    fn test_weekdays_of_month_lists_all_sundays() {
        let sundays = weekdays_of_month(2026, 1, Weekday::Sun);
        assert_eq!(
            sundays,
            vec![
                make_date("2026-01-04"),
                make_date("2026-01-11"),
                make_date("2026-01-18"),
                make_date("2026-01-25"),
            ]
        );
    }

    #[test]
    fn test_mothers_day_second_sunday_of_may() {
        assert_eq!(mothers_day(2024).unwrap(), make_date("2024-05-12"));
        assert_eq!(mothers_day(2025).unwrap(), make_date("2025-05-11"));
    }

    #[test]
    fn test_fathers_day_second_sunday_of_august() {
        assert_eq!(fathers_day(2024).unwrap(), make_date("2024-08-11"));
        assert_eq!(fathers_day(2025).unwrap(), make_date("2025-08-10"));
    }
}
