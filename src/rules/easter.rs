//! Easter and the movable feasts derived from it.
//!
//! Easter Sunday is computed with the Meeus/Jones/Butcher algorithm for the
//! Gregorian calendar. Carnival, Corpus Christi, and holy week are fixed
//! day-offsets from it, the same arithmetic Brazilian holiday calendars use.

use chrono::{Duration, NaiveDate};

use crate::error::EngineResult;
use crate::rules::ymd;

/// Computes Easter Sunday for a year using the Meeus/Jones/Butcher algorithm.
///
/// The result always falls between March 22 and April 25 inclusive.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use custody_engine::rules::easter_sunday;
///
/// let easter = easter_sunday(2025).unwrap();
/// assert_eq!(easter, NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> EngineResult<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    ymd(year, month as u32, day as u32)
}

/// Corpus Christi is 60 days after Easter.
pub fn corpus_christi(year: i32) -> EngineResult<NaiveDate> {
    Ok(easter_sunday(year)? + Duration::days(60))
}

/// Carnival (Shrove Tuesday) is 47 days before Easter.
pub fn carnival(year: i32) -> EngineResult<NaiveDate> {
    Ok(easter_sunday(year)? - Duration::days(47))
}

/// Holy week: the 8 consecutive days from Palm Sunday (Easter minus 7)
/// through Easter Sunday inclusive.
///
/// # Example
///
/// ```
/// use custody_engine::rules::{easter_sunday, holy_week};
///
/// let week = holy_week(2025).unwrap();
/// assert_eq!(week.len(), 8);
/// assert_eq!(week[7], easter_sunday(2025).unwrap());
/// ```
pub fn holy_week(year: i32) -> EngineResult<[NaiveDate; 8]> {
    let palm_sunday = easter_sunday(year)? - Duration::days(7);
    Ok(std::array::from_fn(|i| palm_sunday + Duration::days(i as i64)))
}
