//! Banner domain model.
//!
//! # Responsibility
//! - Define the banner record shown on the site during its publish window.
//! - Keep activity/expiry predicates pure over an explicit evaluation date.
//!
//! # Invariants
//! - `id` is stable and never reused for another banner.
//! - `retired` only ever transitions false -> true; there is no un-retire.
//! - Activity is derived from `(publish_from, publish_until, retired)` plus
//!   the evaluation date; it is never cached or stored.

use crate::model::window::{current_date, date_in_range, date_passed_by};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a banner.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BannerId = Uuid;

/// Validation failures for banner write models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerValidationError {
    /// Banner ids must not be the nil UUID.
    NilId,
    /// `headline` is required and must not be blank.
    EmptyHeadline,
}

impl Display for BannerValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "banner id must not be nil"),
            Self::EmptyHeadline => write!(f, "banner headline must not be blank"),
        }
    }
}

impl Error for BannerValidationError {}

/// A time-windowed promotional announcement.
///
/// The publish window is the closed date interval
/// `[publish_from, publish_until]`; either bound may be unset, leaving that
/// side open. `retired` permanently removes the banner from the active set
/// regardless of its dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Stable global ID used for admin lookups and storage keys.
    pub id: BannerId,
    /// Display/identity string shown with the banner. Required.
    pub headline: String,
    /// Free-text body.
    pub contents: String,
    /// Path reference to the image resource backing the banner.
    pub image: String,
    /// First date (inclusive) the banner may be shown.
    pub publish_from: Option<NaiveDate>,
    /// Last date (inclusive) the banner may be shown.
    pub publish_until: Option<NaiveDate>,
    /// One-way manual deactivation flag.
    pub retired: bool,
}

impl Banner {
    /// Creates a banner with a generated stable ID and no publish window.
    ///
    /// # Invariants
    /// - Both window bounds start unset, so the banner is active until
    ///   retired.
    /// - `retired` starts as `false`.
    pub fn new(
        headline: impl Into<String>,
        contents: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            headline: headline.into(),
            contents: contents.into(),
            image: image.into(),
            publish_from: None,
            publish_until: None,
            retired: false,
        }
    }

    /// Creates a banner with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: BannerId,
        headline: impl Into<String>,
        contents: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self, BannerValidationError> {
        if id.is_nil() {
            return Err(BannerValidationError::NilId);
        }

        let mut banner = Self::new(headline, contents, image);
        banner.id = id;
        Ok(banner)
    }

    /// Checks the write-model invariants enforced before persistence.
    pub fn validate(&self) -> Result<(), BannerValidationError> {
        if self.id.is_nil() {
            return Err(BannerValidationError::NilId);
        }
        if self.headline.trim().is_empty() {
            return Err(BannerValidationError::EmptyHeadline);
        }
        Ok(())
    }

    /// Returns whether the banner is shown on the given date.
    ///
    /// True exactly when `on` falls inside the publish window and the
    /// banner has not been retired.
    pub fn active_on(&self, on: NaiveDate) -> bool {
        !self.retired && date_in_range(on, self.publish_from, self.publish_until)
    }

    /// Returns whether the banner is shown today.
    pub fn active(&self) -> bool {
        self.active_on(current_date())
    }

    /// Returns whether the publish window closed before the given date.
    ///
    /// Expiry looks only at `publish_until`: a manually retired banner with
    /// a future (or unset) cut-off is inactive yet not expired. Retirement
    /// and expiry are distinct concepts and must stay that way.
    pub fn expired_on(&self, on: NaiveDate) -> bool {
        date_passed_by(on, self.publish_until)
    }

    /// Returns whether the publish window closed before today.
    pub fn expired(&self) -> bool {
        self.expired_on(current_date())
    }

    /// Marks this banner as permanently retired.
    ///
    /// The in-memory counterpart of the repository's `set_retired`; there is
    /// deliberately no inverse operation.
    pub fn retire(&mut self) {
        self.retired = true;
    }
}

impl Display for Banner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.headline)
    }
}
