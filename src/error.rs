//! Error types for the custody schedule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a schedule.

use thiserror::Error;

/// The main error type for the custody schedule engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use custody_engine::error::EngineError;
///
/// let error = EngineError::InvalidRange {
///     start_year: 2027,
///     end_year: 2025,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid year range: start year 2027 is after end year 2025"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested year range has a start year after its end year.
    #[error("Invalid year range: start year {start_year} is after end year {end_year}")]
    InvalidRange {
        /// The first year of the requested range.
        start_year: i32,
        /// The last year of the requested range.
        end_year: i32,
    },

    /// A calendar date could not be constructed from its components.
    #[error("Invalid date: {year:04}-{month:02}-{day:02} does not exist")]
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component (1-12).
        month: u32,
        /// The day-of-month component.
        day: u32,
    },

    /// A date-rule search produced no candidate at all.
    #[error("Date rule '{rule}' produced no date for year {year}")]
    RuleExhausted {
        /// The name of the date rule that failed.
        rule: &'static str,
        /// The year the rule was evaluated for.
        year: i32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
