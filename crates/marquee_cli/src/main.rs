//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `marquee_core` wiring.
//! - Seed an in-memory database and show the banner partition plus the
//!   admin registrations.

use chrono::Duration;
use marquee_core::{
    core_version, current_date, open_db_in_memory, Banner, BannerService, SqliteBannerRepository,
    ADMIN_REGISTRY,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("marquee_core version={}", core_version());

    let conn = open_db_in_memory()?;
    let service = BannerService::new(SqliteBannerRepository::try_new(&conn)?);
    let today = current_date();

    service.create_banner(&Banner::new(
        "Welcome",
        "First visit? Start here.",
        "welcome.png",
    ))?;

    let mut fair = Banner::new("Spring fair", "Stalls open from ten.", "fair.png");
    fair.publish_from = Some(today + Duration::days(10));
    fair.publish_until = Some(today + Duration::days(20));
    service.create_banner(&fair)?;

    let mut old_notice = Banner::new("Old notice", "", "");
    old_notice.publish_until = Some(today - Duration::days(1));
    service.create_banner(&old_notice)?;

    let retired = service.create_banner(&Banner::new("Retired notice", "", ""))?;
    service.retire_banner(retired.id)?;

    let active = service.active_banners()?;
    println!("active={}", active.len());
    for banner in &active {
        println!("  {banner}");
    }

    let inactive = service.inactive_banners()?;
    println!("inactive={}", inactive.len());
    for banner in &inactive {
        println!("  {banner}");
    }

    for registration in ADMIN_REGISTRY {
        println!(
            "admin resource={} search_fields={:?} list_columns={:?}",
            registration.resource, registration.search_fields, registration.list_columns
        );
    }

    Ok(())
}
