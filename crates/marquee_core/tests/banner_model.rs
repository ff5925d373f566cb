use chrono::NaiveDate;
use marquee_core::{Banner, BannerValidationError};
use uuid::Uuid;

#[test]
fn banner_new_sets_defaults() {
    let banner = Banner::new("June sale", "Everything half price", "sale.png");

    assert!(!banner.id.is_nil());
    assert_eq!(banner.headline, "June sale");
    assert_eq!(banner.contents, "Everything half price");
    assert_eq!(banner.image, "sale.png");
    assert_eq!(banner.publish_from, None);
    assert_eq!(banner.publish_until, None);
    assert!(!banner.retired);
    // No window and no retirement means the banner shows on any date.
    assert!(banner.active());
    assert!(!banner.expired());
}

#[test]
fn display_shows_the_headline() {
    let banner = Banner::new("Harvest festival", "", "");
    assert_eq!(banner.to_string(), "Harvest festival");
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Banner::with_id(Uuid::nil(), "invalid", "", "").unwrap_err();
    assert_eq!(err, BannerValidationError::NilId);
}

#[test]
fn validate_rejects_blank_headline() {
    let banner = Banner::new("   ", "body", "img.png");
    let err = banner.validate().unwrap_err();
    assert_eq!(err, BannerValidationError::EmptyHeadline);
}

#[test]
fn activity_honors_window_bounds_and_retirement() {
    let mut banner = Banner::new("June sale", "", "");
    banner.publish_from = Some(june(10));
    banner.publish_until = Some(june(20));

    assert!(!banner.active_on(june(9)));
    assert!(banner.active_on(june(10)));
    assert!(banner.active_on(june(15)));
    assert!(banner.active_on(june(20)));
    assert!(!banner.active_on(june(21)));

    banner.retire();
    assert!(!banner.active_on(june(15)));
}

#[test]
fn expiry_tracks_only_the_end_bound() {
    let mut banner = Banner::new("June sale", "", "");
    banner.publish_until = Some(june(20));

    assert!(!banner.expired_on(june(19)));
    assert!(!banner.expired_on(june(20)));
    assert!(banner.expired_on(june(21)));

    // A closed window stays expired whether or not the banner was also
    // retired by hand.
    banner.retire();
    assert!(banner.expired_on(june(21)));

    let open_ended = Banner::new("Forever", "", "");
    assert!(!open_ended.expired_on(june(21)));

    let mut start_only = Banner::new("Upcoming", "", "");
    start_only.publish_from = Some(june(25));
    assert!(!start_only.expired_on(june(21)));
}

#[test]
fn retirement_is_not_expiry() {
    let mut banner = Banner::new("Notice", "", "");
    banner.publish_until = Some(june(30));
    banner.retire();

    // Retired inside its window: hidden, yet the window has not closed.
    assert!(!banner.active_on(june(15)));
    assert!(!banner.expired_on(june(15)));
}

#[test]
fn banner_serialization_uses_expected_wire_fields() {
    let banner_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut banner = Banner::with_id(banner_id, "June sale", "Half price", "sale.png").unwrap();
    banner.publish_from = Some(june(10));
    banner.publish_until = Some(june(20));

    let json = serde_json::to_value(&banner).unwrap();
    assert_eq!(json["id"], banner_id.to_string());
    assert_eq!(json["headline"], "June sale");
    assert_eq!(json["contents"], "Half price");
    assert_eq!(json["image"], "sale.png");
    assert_eq!(json["publish_from"], "2024-06-10");
    assert_eq!(json["publish_until"], "2024-06-20");
    assert_eq!(json["retired"], false);

    let decoded: Banner = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, banner);
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}
