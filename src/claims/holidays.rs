//! Common holiday claims (priority 2).
//!
//! National and regional (Teresina/Piauí) holidays. The assignee alternates
//! by `(index + year) % 2`, where index is the holiday's fixed position in
//! the declaration list below — keeping each holiday's long-run rotation
//! stable across years.

use crate::error::EngineResult;
use crate::models::{Assignee, ClaimStore, PriorityClass};
use crate::rules::{corpus_christi, ymd};

/// Emits all [`PriorityClass::CommonHoliday`] claims for a year.
///
/// The declaration order is load-bearing: each holiday's index feeds its
/// alternation rule, so entries must not be reordered.
pub fn common_holiday_claims(year: i32, store: &mut ClaimStore) -> EngineResult<()> {
    let holidays = [
        (ymd(year, 5, 1)?, "Dia do Trabalho"),
        (corpus_christi(year)?, "Corpus Christi"),
        (ymd(year, 8, 16)?, "Aniversário de Teresina"),
        (ymd(year, 9, 7)?, "Independência do Brasil"),
        (ymd(year, 10, 12)?, "Dia das Crianças"),
        (ymd(year, 10, 15)?, "Dia do Professor"),
        (ymd(year, 10, 19)?, "Aniversário do Piauí"),
        (ymd(year, 4, 21)?, "Tiradentes"),
        (ymd(year, 11, 2)?, "Finados"),
        (ymd(year, 12, 8)?, "Nossa Senhora da Conceição"),
        (ymd(year, 11, 20)?, "Consciência Negra"),
        (ymd(year, 11, 15)?, "Proclamação da República"),
    ];

    for (index, (date, name)) in holidays.into_iter().enumerate() {
        let assignee = Assignee::pick(
            (index as i32 + year).rem_euclid(2) == 0,
            Assignee::Father,
        );
        store.push(
            date,
            PriorityClass::CommonHoliday,
            assignee,
            format!("Feriado: {}", name),
        );
    }

    Ok(())
}
