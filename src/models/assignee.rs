//! Guardian assignee model.

use serde::{Deserialize, Serialize};

/// The guardian a day is assigned to.
///
/// Displayed as the original agreement's Portuguese labels: "pai" for the
/// father and "mae" for the mother.
///
/// # Example
///
/// ```
/// use custody_engine::models::Assignee;
///
/// assert_eq!(Assignee::Father.to_string(), "pai");
/// assert_eq!(Assignee::Father.other(), Assignee::Mother);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignee {
    /// The father ("pai").
    Father,
    /// The mother ("mae").
    Mother,
}

impl Assignee {
    /// Returns the other guardian.
    ///
    /// Used by every alternation rule: vacation sub-periods, the weekend
    /// rotation, and year-parity swaps all flip between the two guardians.
    pub fn other(self) -> Self {
        match self {
            Assignee::Father => Assignee::Mother,
            Assignee::Mother => Assignee::Father,
        }
    }

    /// Picks the guardian seeded by a year-parity flag.
    ///
    /// Returns `preferred` when `condition` is true, otherwise the other
    /// guardian. Keeps the "Father if odd year else Mother" style rules in
    /// one place.
    pub fn pick(condition: bool, preferred: Assignee) -> Self {
        if condition { preferred } else { preferred.other() }
    }
}

impl std::fmt::Display for Assignee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Assignee::Father => write!(f, "pai"),
            Assignee::Mother => write!(f, "mae"),
        }
    }
}
