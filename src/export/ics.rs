//! ICS (RFC 5545) generation.
//!
//! Every resolved day becomes one all-day, transparent event named after the
//! assigned guardian, with the winning reason in the event description. The
//! output is fully deterministic: UIDs derive from the event date and the
//! DTSTAMP derives from the schedule range, so identical inputs produce
//! byte-identical documents.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Assignee, ResolvedDay};

const PRODID: &str = "-//custody-engine//Custody Schedule//PT";

/// Suggests a file name for an exported schedule,
/// e.g. `custody_2025_2027.ics`.
pub fn generate_filename(start_year: i32, end_year: i32) -> String {
    format!("custody_{}_{}.ics", start_year, end_year)
}

/// Renders a resolved schedule as an RFC 5545 VCALENDAR document.
///
/// # Example
///
/// ```
/// use custody_engine::export::generate_ics;
/// use custody_engine::resolve::generate_schedule;
///
/// let schedule = generate_schedule(2025, 2025).unwrap();
/// let ics = generate_ics(&schedule, 2025, 2025);
/// assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
/// assert!(ics.ends_with("END:VCALENDAR\r\n"));
/// ```
pub fn generate_ics(days: &[ResolvedDay], start_year: i32, end_year: i32) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{}", PRODID));
    push_line(&mut out, "CALSCALE:GREGORIAN");
    push_line(
        &mut out,
        &format!(
            "X-WR-CALNAME:{}",
            escape_text(&format!("Guarda {}-{}", start_year, end_year))
        ),
    );

    // Deterministic stamp: midnight UTC on the first day of the range
    let dtstamp = format!("{:04}0101T000000Z", start_year);

    for day in days {
        push_line(&mut out, "BEGIN:VEVENT");
        push_line(
            &mut out,
            &format!("UID:custody-{}@custody-engine", format_date(day.date)),
        );
        push_line(&mut out, &format!("DTSTAMP:{}", dtstamp));
        push_line(
            &mut out,
            &format!("DTSTART;VALUE=DATE:{}", format_date(day.date)),
        );
        push_line(
            &mut out,
            &format!(
                "DTEND;VALUE=DATE:{}",
                format_date(day.date + Duration::days(1))
            ),
        );
        push_line(
            &mut out,
            &format!("SUMMARY:{}", escape_text(&summary_for(day.assignee))),
        );
        push_line(
            &mut out,
            &format!("DESCRIPTION:{}", escape_text(&day.reason)),
        );
        // Transparent so the schedule does not block the guardians' agendas
        push_line(&mut out, "TRANSP:TRANSPARENT");
        push_line(&mut out, "END:VEVENT");
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

fn summary_for(assignee: Assignee) -> String {
    match assignee {
        Assignee::Father => "Guarda - Pai".to_string(),
        Assignee::Mother => "Guarda - Mãe".to_string(),
    }
}

fn format_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Appends a content line with the CRLF terminator RFC 5545 requires.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

/// Escapes TEXT property values: backslash, semicolon, comma, and newline.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}
