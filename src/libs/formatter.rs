//! Date parsing and formatting for user-friendly display.
//!
//! Due dates travel through three shapes in the application:
//!
//! - **Stored**: whatever an earlier version (or a hand-edited database) left in
//!   the `dueDate` field. Read leniently by [`parse_stored_date`].
//! - **Typed**: what the user passes to `--due`. Read by [`parse_due_input`],
//!   which also understands `today` and `tomorrow`.
//! - **Displayed**: the short label shown in task tables, produced by
//!   [`format_due_date`].
//!
//! ## Label Format
//!
//! - Due on the reference day → `Today`
//! - Due the day after → `Tomorrow`
//! - Same year → `Jun 20`
//! - Other year → `Jun 20, 2025`
//!
//! ## Examples
//!
//! ```rust
//! use taskflow::libs::formatter::{format_due_date, parse_due_input};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let due = parse_due_input("tomorrow", now).unwrap();
//! assert_eq!(format_due_date(due, now), "Tomorrow");
//! ```

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-time layouts accepted for stored and typed due dates, tried in order.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Date-only layout. Interpreted as local midnight.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a persisted due date into local wall-clock time.
///
/// Accepts RFC 3339 timestamps (converted from their offset to local time),
/// naive date-times in the layouts of [`DATE_TIME_FORMATS`], and bare dates.
/// Returns `None` for anything else, including empty strings.
pub fn parse_stored_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(&Local).naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| NaiveDate::parse_from_str(value, DATE_FORMAT).ok().and_then(|date| date.and_hms_opt(0, 0, 0)))
}

/// Parses a due date typed on the command line.
///
/// Besides the stored layouts, `today` and `tomorrow` (any case) resolve to
/// midnight of the matching day relative to `now`.
pub fn parse_due_input(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let today = now.date();
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "today" => today.and_hms_opt(0, 0, 0),
        "tomorrow" => (today + Duration::days(1)).and_hms_opt(0, 0, 0),
        _ => parse_stored_date(input),
    }
}

/// Short label for a due date relative to `now`.
pub fn format_due_date(due: NaiveDateTime, now: NaiveDateTime) -> String {
    let today = now.date();
    let due_day = due.date();

    if due_day == today {
        "Today".to_string()
    } else if due_day == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else if due_day.year() == today.year() {
        due_day.format("%b %-d").to_string()
    } else {
        due_day.format("%b %-d, %Y").to_string()
    }
}

/// Layout used to pre-fill interactive prompts with an existing due date.
pub fn format_due_input(due: NaiveDateTime) -> String {
    if due.time() == NaiveTime::MIN {
        due.format(DATE_FORMAT).to_string()
    } else {
        due.format("%Y-%m-%d %H:%M").to_string()
    }
}
