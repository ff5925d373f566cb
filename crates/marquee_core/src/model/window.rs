//! Publication-window date checks.
//!
//! # Responsibility
//! - Decide whether a date falls inside an optional closed publish window.
//! - Decide whether an optional cut-off date lies strictly in the past.
//!
//! # Invariants
//! - Window bounds are inclusive; an unset bound never constrains.
//! - The `*_in_range`/`*_passed_by` forms are pure functions of their
//!   arguments; only the `today_*` wrappers read the ambient clock, once.

use chrono::{Local, NaiveDate};

/// Returns the current calendar date in the host's local timezone.
///
/// Query and predicate logic takes its evaluation date as an explicit
/// argument; this helper is the single place the ambient clock is read.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns whether `on` falls inside the closed window `[from, until]`.
///
/// An unset bound leaves that side of the window open, so a window with
/// neither bound set contains every date.
pub fn date_in_range(on: NaiveDate, from: Option<NaiveDate>, until: Option<NaiveDate>) -> bool {
    match (from, until) {
        (None, None) => true,
        (None, Some(until)) => on <= until,
        (Some(from), None) => from <= on,
        (Some(from), Some(until)) => from <= on && on <= until,
    }
}

/// Returns whether today falls inside the closed window `[from, until]`.
pub fn today_in_range(from: Option<NaiveDate>, until: Option<NaiveDate>) -> bool {
    date_in_range(current_date(), from, until)
}

/// Returns whether `date` lies strictly before `on`.
///
/// An unset date never counts as passed, and `on` itself has not passed.
pub fn date_passed_by(on: NaiveDate, date: Option<NaiveDate>) -> bool {
    date.is_some_and(|value| value < on)
}

/// Returns whether `date` lies strictly before today.
pub fn date_has_passed(date: Option<NaiveDate>) -> bool {
    date_passed_by(current_date(), date)
}
