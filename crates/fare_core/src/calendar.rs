//! Ride-day counting over a date range with optional weekday recurrence.
//!
//! All arithmetic is calendar-day counting on naive dates, so timezone
//! and DST shifts cannot introduce off-by-one errors.

use chrono::{Datelike, NaiveDate, Weekday};

/// Inclusive day count of the whole range. Equal dates count as one day.
pub fn inclusive_day_span(start: NaiveDate, end: NaiveDate) -> u32 {
    (end - start).num_days().unsigned_abs() as u32 + 1
}

/// Number of calendar days in `[start, end]` that qualify as ride days.
///
/// Non-recurring requests count every day in the range. Recurring
/// requests count only days whose weekday matches `selected_weekdays`
/// (English names, compared case-insensitively); an empty selection
/// matches nothing. Names that are not weekdays never match.
///
/// Callers enforce date ordering before invoking; this function does not
/// re-validate it.
pub fn matched_days(
    start: NaiveDate,
    end: NaiveDate,
    recurring: bool,
    selected_weekdays: &[String],
) -> u32 {
    if !recurring {
        return inclusive_day_span(start, end);
    }
    if selected_weekdays.is_empty() {
        return 0;
    }

    let wanted: Vec<Weekday> = selected_weekdays
        .iter()
        .filter_map(|name| name.parse().ok())
        .collect();

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| wanted.contains(&day.weekday()))
        .count() as u32
}
