//! Resolved schedule day model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Assignee, PriorityClass};

/// One day of the resolved schedule.
///
/// Produced by the day resolver after all claims have been accumulated:
/// exactly one record per day whose winning claim is [`PriorityClass::Weekend`]
/// or stronger. Days under no special rule produce no record at all.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use custody_engine::models::{Assignee, PriorityClass, ResolvedDay};
///
/// let day = ResolvedDay {
///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
///     assignee: Assignee::Father,
///     reason: "Natal".to_string(),
///     priority: PriorityClass::MajorFixed,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDay {
    /// The calendar day.
    pub date: NaiveDate,
    /// The guardian the day was assigned to.
    pub assignee: Assignee,
    /// The justification of the winning claim.
    pub reason: String,
    /// The priority class of the winning claim.
    pub priority: PriorityClass,
}
