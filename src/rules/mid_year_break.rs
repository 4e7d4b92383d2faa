//! Mid-year school vacation boundary rule.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Computes the mid-year school vacation block for a year.
///
/// The block starts on the last Monday of June when that Monday lands on the
/// 27th through 30th; otherwise it starts on the first Monday of July. A last
/// Monday on June 26 deliberately falls through to the July branch, matching
/// the agreement as written. The block always spans 30 days: the returned end
/// date is start plus 29 days, inclusive.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use custody_engine::rules::mid_year_break;
///
/// // June 30, 2025 is a Monday
/// let (start, end) = mid_year_break(2025).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2025, 7, 29).unwrap());
/// ```
pub fn mid_year_break(year: i32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let mut start = None;

    // Last Monday of June, only if it lands within the 27-30 window
    for day in (27..=30).rev() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 6, day) {
            if date.weekday() == Weekday::Mon {
                start = Some(date);
                break;
            }
        }
    }

    // Otherwise the first Monday of July
    let start = match start {
        Some(date) => date,
        None => (1..=7)
            .filter_map(|day| NaiveDate::from_ymd_opt(year, 7, day))
            .find(|date| date.weekday() == Weekday::Mon)
            .ok_or(EngineError::RuleExhausted {
                rule: "mid_year_break",
                year,
            })?,
    };

    Ok((start, start + Duration::days(29)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_starts_on_last_june_monday_when_in_window() {
        // June 30, 2025 and June 29, 2026 are Mondays inside the 27-30 window
        assert_eq!(
            mid_year_break(2025).unwrap(),
            (make_date("2025-06-30"), make_date("2025-07-29"))
        );
        assert_eq!(
            mid_year_break(2026).unwrap(),
            (make_date("2026-06-29"), make_date("2026-07-28"))
        );
    }

    #[test]
    fn test_falls_back_to_first_july_monday() {
        // The last Monday of June 2024 is the 24th, outside the window
        assert_eq!(
            mid_year_break(2024).unwrap(),
            (make_date("2024-07-01"), make_date("2024-07-30"))
        );
    }

    #[test]
    fn test_block_is_always_thirty_days() {
        for year in 2020..=2040 {
            let (start, end) = mid_year_break(year).unwrap();
            assert_eq!((end - start).num_days(), 29, "year {}", year);
        }
    }

    #[test]
    fn test_start_is_always_a_monday() {
        for year in 2020..=2040 {
            let (start, _) = mid_year_break(year).unwrap();
            assert_eq!(start.weekday(), Weekday::Mon, "year {}", year);
        }
    }

    #[test]
    fn test_start_is_late_june_or_early_july() {
        for year in 2020..=2040 {
            let (start, _) = mid_year_break(year).unwrap();
            let in_june_window = start.month() == 6 && start.day() >= 27;
            let in_july_window = start.month() == 7 && start.day() <= 7;
            assert!(in_june_window || in_july_window, "year {}: {}", year, start);
        }
    }
}
