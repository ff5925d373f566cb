//! Banner use-case service.
//!
//! # Responsibility
//! - Provide create/edit/retire/delete entry points and the active and
//!   inactive collection views.
//! - Evaluate "today" exactly once per call and pass it down explicitly.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or the one-way
//!   retirement rule.
//! - Collection views are re-evaluated on every call; activity is never
//!   cached.

use crate::model::banner::{Banner, BannerId, BannerValidationError};
use crate::model::window::current_date;
use crate::repo::banner_repo::BannerRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for banner use-cases.
#[derive(Debug)]
pub enum BannerServiceError {
    /// Write model failed validation.
    InvalidBanner(BannerValidationError),
    /// Target banner does not exist (or is filtered out of the queried
    /// collection).
    BannerNotFound(BannerId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for BannerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBanner(err) => write!(f, "{err}"),
            Self::BannerNotFound(id) => write!(f, "banner not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent banner state: {details}"),
        }
    }
}

impl Error for BannerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBanner(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for BannerServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::BannerNotFound(id),
            RepoError::Banner(err) => Self::InvalidBanner(err),
            other => Self::Repo(other),
        }
    }
}

/// Banner service facade over repository implementations.
pub struct BannerService<R: BannerRepository> {
    repo: R,
}

impl<R: BannerRepository> BannerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new banner and returns the stored row.
    pub fn create_banner(&self, banner: &Banner) -> Result<Banner, BannerServiceError> {
        let id = self.repo.create_banner(banner)?;
        self.read_back(id, "created banner not found in read-back")
    }

    /// Replaces the editable fields of an existing banner.
    ///
    /// The `retired` flag on the argument is ignored; retirement only moves
    /// through [`retire_banner`](Self::retire_banner).
    pub fn edit_banner(&self, banner: &Banner) -> Result<Banner, BannerServiceError> {
        self.repo.update_banner(banner)?;
        self.read_back(banner.id, "edited banner not found in read-back")
    }

    /// Gets one banner by id regardless of activity state.
    pub fn get_banner(&self, id: BannerId) -> RepoResult<Option<Banner>> {
        self.repo.get_banner(id)
    }

    /// Gets one banner from today's active collection.
    ///
    /// Fails with [`BannerServiceError::BannerNotFound`] when the banner is
    /// retired or outside its publish window, not just when the row is
    /// missing.
    pub fn get_active_banner(&self, id: BannerId) -> Result<Banner, BannerServiceError> {
        Ok(self.repo.get_active_banner(id, current_date())?)
    }

    /// Lists every banner for administrative screens.
    pub fn list_banners(&self) -> RepoResult<Vec<Banner>> {
        self.repo.list_banners()
    }

    /// Lists banners shown today.
    pub fn active_banners(&self) -> RepoResult<Vec<Banner>> {
        self.repo.list_active_banners(current_date())
    }

    /// Lists banners not shown today: retired, not yet published, or past
    /// their window.
    pub fn inactive_banners(&self) -> RepoResult<Vec<Banner>> {
        self.repo.list_inactive_banners(current_date())
    }

    /// Permanently retires one banner and returns the stored row.
    ///
    /// Idempotent: retiring an already-retired banner succeeds with no
    /// further effect.
    pub fn retire_banner(&self, id: BannerId) -> Result<Banner, BannerServiceError> {
        self.repo.set_retired(id)?;
        info!("event=banner_retired module=service status=ok banner_id={id}");
        self.read_back(id, "retired banner not found in read-back")
    }

    /// Hard-deletes one banner.
    pub fn delete_banner(&self, id: BannerId) -> Result<(), BannerServiceError> {
        self.repo.delete_banner(id)?;
        Ok(())
    }

    fn read_back(
        &self,
        id: BannerId,
        missing: &'static str,
    ) -> Result<Banner, BannerServiceError> {
        self.repo
            .get_banner(id)?
            .ok_or(BannerServiceError::InconsistentState(missing))
    }
}
