//! Major fixed-date claims (priority 0).
//!
//! Christmas, New Year, holy week, the Carnival window, the child's
//! birthday, the static family commemorations, and Mother's/Father's Day.

use chrono::Duration;

use crate::error::EngineResult;
use crate::models::{Assignee, ClaimStore, PriorityClass};
use crate::rules::{carnival, fathers_day, holy_week, mothers_day, ymd};

/// Static family commemorations: (month, day, assignee, reason).
///
/// These are assigned to a fixed guardian every year, independent of parity.
const FAMILY_EVENTS: &[(u32, u32, Assignee, &str)] = &[
    (1, 14, Assignee::Father, "Aniversário Vovó Sônia"),
    (6, 12, Assignee::Father, "Aniversário Vovô Joca"),
    (6, 1, Assignee::Father, "Aniversário Tia Ana"),
    (11, 3, Assignee::Father, "Aniversário do Pai"),
    (2, 14, Assignee::Mother, "Aniversário Tia Ié"),
    (4, 16, Assignee::Mother, "Aniversário Vovó Dudu"),
    (9, 25, Assignee::Mother, "Aniversário Vovô Lulu"),
    (12, 31, Assignee::Mother, "Aniversário Bisa Orquídea"),
    (12, 25, Assignee::Mother, "Aniversário Tio Filipe"),
    (1, 20, Assignee::Mother, "Aniversário da Mãe"),
];

/// Emits all [`PriorityClass::MajorFixed`] claims for a year.
///
/// Parity-linked alternations: Christmas and holy week go to the father on
/// odd years, New Year, Carnival, and the child's birthday to the mother on
/// odd years. Mother's Day is always the mother's and Father's Day always
/// the father's. The static family events never alternate.
///
/// The New Year claim covers December 31 of `year` and January 1 of the
/// following year, both under the same guardian.
pub fn major_fixed_claims(year: i32, odd_year: bool, store: &mut ClaimStore) -> EngineResult<()> {
    // Christmas: Dec 24-25
    let christmas_assignee = Assignee::pick(odd_year, Assignee::Father);
    for day in [24, 25] {
        store.push(
            ymd(year, 12, day)?,
            PriorityClass::MajorFixed,
            christmas_assignee,
            "Natal",
        );
    }

    // New Year: Dec 31 and the following Jan 1, keyed by absolute date
    let new_year_assignee = Assignee::pick(odd_year, Assignee::Mother);
    store.push(
        ymd(year, 12, 31)?,
        PriorityClass::MajorFixed,
        new_year_assignee,
        "Ano Novo",
    );
    store.push(
        ymd(year + 1, 1, 1)?,
        PriorityClass::MajorFixed,
        new_year_assignee,
        "Ano Novo",
    );

    // Holy week: Palm Sunday through Easter
    let easter_assignee = Assignee::pick(odd_year, Assignee::Father);
    for date in holy_week(year)? {
        store.push(
            date,
            PriorityClass::MajorFixed,
            easter_assignee,
            "Semana Santa/Páscoa",
        );
    }

    // Carnival window: the day before through the day after
    let carnival_date = carnival(year)?;
    let carnival_assignee = Assignee::pick(odd_year, Assignee::Mother);
    for offset in -1..=1 {
        store.push(
            carnival_date + Duration::days(offset),
            PriorityClass::MajorFixed,
            carnival_assignee,
            "Carnaval",
        );
    }

    // The child's birthday alternates by parity
    store.push(
        ymd(year, 7, 6)?,
        PriorityClass::MajorFixed,
        Assignee::pick(odd_year, Assignee::Mother),
        "Aniversário Letícia",
    );

    // Static family commemorations
    for &(month, day, assignee, reason) in FAMILY_EVENTS {
        store.push(
            ymd(year, month, day)?,
            PriorityClass::MajorFixed,
            assignee,
            reason,
        );
    }

    // Father's Day and Mother's Day never alternate
    store.push(
        fathers_day(year)?,
        PriorityClass::MajorFixed,
        Assignee::Father,
        "Dia dos Pais",
    );
    store.push(
        mothers_day(year)?,
        PriorityClass::MajorFixed,
        Assignee::Mother,
        "Dia das Mães",
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn claims_for(year: i32, odd_year: bool, date: &str) -> Vec<crate::models::Claim> {
        let mut store = ClaimStore::new();
        major_fixed_claims(year, odd_year, &mut store).unwrap();
        store.claims_for(make_date(date)).to_vec()
    }

    #[test]
    fn test_christmas_father_on_odd_years() {
        let claims = claims_for(2025, true, "2025-12-25");
        assert_eq!(claims[0].reason, "Natal");
        assert_eq!(claims[0].assignee, Assignee::Father);
    }

    #[test]
    fn test_christmas_mother_on_even_years() {
        let claims = claims_for(2024, false, "2024-12-25");
        assert_eq!(claims[0].reason, "Natal");
        assert_eq!(claims[0].assignee, Assignee::Mother);
    }

    #[test]
    fn test_new_year_opposes_christmas() {
        let claims = claims_for(2025, true, "2025-12-31");
        let new_year = claims.iter().find(|c| c.reason == "Ano Novo").unwrap();
        assert_eq!(new_year.assignee, Assignee::Mother);
    }

    #[test]
    fn test_holy_week_covers_eight_days() {
        let mut store = ClaimStore::new();
        major_fixed_claims(2025, true, &mut store).unwrap();
        // Palm Sunday 2025 is Apr 13, Easter is Apr 20
        for day in 13..=20 {
            let date = NaiveDate::from_ymd_opt(2025, 4, day).unwrap();
            let claims = store.claims_for(date);
            assert!(
                claims.iter().any(|c| c.reason == "Semana Santa/Páscoa"
                    && c.assignee == Assignee::Father),
                "missing holy week claim on {}",
                date
            );
        }
    }

    #[test]
    fn test_carnival_window_is_three_days() {
        let mut store = ClaimStore::new();
        major_fixed_claims(2025, true, &mut store).unwrap();
        // Carnival 2025 is Mar 4; window Mar 3-5, mother on odd years
        for day in 3..=5 {
            let date = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
            let claims = store.claims_for(date);
            assert!(
                claims
                    .iter()
                    .any(|c| c.reason == "Carnaval" && c.assignee == Assignee::Mother),
                "missing carnival claim on {}",
                date
            );
        }
    }

    #[test]
    fn test_child_birthday_alternates() {
        let odd = claims_for(2025, true, "2025-07-06");
        assert_eq!(odd[0].assignee, Assignee::Mother);

        let even = claims_for(2024, false, "2024-07-06");
        assert_eq!(even[0].assignee, Assignee::Father);
    }

    #[test]
    fn test_family_events_are_parity_independent() {
        for (odd_year, year) in [(false, 2024), (true, 2025)] {
            let claims = claims_for(year, odd_year, &format!("{}-11-03", year));
            let event = claims
                .iter()
                .find(|c| c.reason == "Aniversário do Pai")
                .unwrap();
            assert_eq!(event.assignee, Assignee::Father);
        }
    }

    #[test]
    fn test_fathers_day_always_father() {
        // 2nd Sunday of August, both parities
        let odd = claims_for(2025, true, "2025-08-10");
        assert!(odd.iter().any(|c| c.reason == "Dia dos Pais" && c.assignee == Assignee::Father));

        let even = claims_for(2024, false, "2024-08-11");
        assert!(even.iter().any(|c| c.reason == "Dia dos Pais" && c.assignee == Assignee::Father));
    }

    #[test]
    fn test_mothers_day_always_mother() {
        let claims = claims_for(2025, true, "2025-05-11");
        assert!(claims.iter().any(|c| c.reason == "Dia das Mães" && c.assignee == Assignee::Mother));
    }

    #[test]
    fn test_all_claims_are_major_fixed() {
        let mut store = ClaimStore::new();
        major_fixed_claims(2025, true, &mut store).unwrap();
        let date = make_date("2025-12-25");
        assert!(
            store
                .claims_for(date)
                .iter()
                .all(|c| c.priority == PriorityClass::MajorFixed)
        );
    }
}
