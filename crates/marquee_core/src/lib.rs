//! Core domain logic for Marquee.
//! This crate is the single source of truth for business invariants.

pub mod admin;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use admin::{
    registration_for, AdminRegistration, ADMIN_REGISTRY, BANNER_ADMIN, DOCUMENT_ADMIN,
};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::banner::{Banner, BannerId, BannerValidationError};
pub use model::document::{Document, DocumentId, DocumentValidationError};
pub use model::window::{current_date, date_has_passed, today_in_range};
pub use repo::banner_repo::{BannerRepository, SqliteBannerRepository};
pub use repo::document_repo::{
    DocumentListQuery, DocumentRecord, DocumentRepository, SqliteDocumentRepository,
};
pub use repo::{RepoError, RepoResult};
pub use search::fts::{
    search_documents, DocumentSearchHit, DocumentSearchQuery, SearchError, SearchResult,
};
pub use service::banner_service::{BannerService, BannerServiceError};
pub use service::document_service::{DocumentService, DocumentServiceError, DocumentsListResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
