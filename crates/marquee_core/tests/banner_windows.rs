use chrono::Duration;
use marquee_core::{current_date, date_has_passed, today_in_range};

#[test]
fn no_window_is_always_in_range() {
    assert!(today_in_range(None, None));
}

#[test]
fn start_bound_admits_today_and_earlier_starts() {
    let today = current_date();

    assert!(today_in_range(Some(today - Duration::days(1)), None));
    assert!(today_in_range(Some(today), None));
    assert!(!today_in_range(Some(today + Duration::days(1)), None));
}

#[test]
fn end_bound_admits_today_and_later_ends() {
    let today = current_date();

    assert!(today_in_range(None, Some(today + Duration::days(1))));
    assert!(today_in_range(None, Some(today)));
    assert!(!today_in_range(None, Some(today - Duration::days(1))));
}

#[test]
fn closed_window_requires_both_bounds_to_admit_today() {
    let today = current_date();

    assert!(today_in_range(
        Some(today - Duration::days(1)),
        Some(today + Duration::days(1))
    ));
    assert!(today_in_range(Some(today), Some(today)));
    assert!(!today_in_range(
        Some(today - Duration::days(3)),
        Some(today - Duration::days(1))
    ));
    assert!(!today_in_range(
        Some(today + Duration::days(1)),
        Some(today + Duration::days(3))
    ));
}

#[test]
fn inverted_window_admits_nothing() {
    let today = current_date();

    assert!(!today_in_range(
        Some(today + Duration::days(1)),
        Some(today - Duration::days(1))
    ));
}

#[test]
fn unset_date_never_counts_as_passed() {
    assert!(!date_has_passed(None));
}

#[test]
fn only_strictly_past_dates_count_as_passed() {
    let today = current_date();

    assert!(date_has_passed(Some(today - Duration::days(1))));
    assert!(!date_has_passed(Some(today)));
    assert!(!date_has_passed(Some(today + Duration::days(1))));
}
