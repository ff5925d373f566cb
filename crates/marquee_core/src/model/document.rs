//! Document domain model.
//!
//! # Responsibility
//! - Define the editable document record registered for admin search and
//!   listing.
//!
//! # Invariants
//! - `id` is stable and never reused for another document.
//! - The `modified` timestamp is owned by the storage layer and lives on
//!   the read model only; it is never client-assigned.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a document.
pub type DocumentId = Uuid;

/// Validation failures for document write models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentValidationError {
    /// Document ids must not be the nil UUID.
    NilId,
    /// `title` is required and must not be blank.
    EmptyTitle,
}

impl Display for DocumentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "document id must not be nil"),
            Self::EmptyTitle => write!(f, "document title must not be blank"),
        }
    }
}

impl Error for DocumentValidationError {}

/// Editable fields of a document.
///
/// Reads come back as [`DocumentRecord`](crate::repo::document_repo::DocumentRecord),
/// which additionally carries the storage-maintained `modified` timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable global ID used for admin lookups and storage keys.
    pub id: DocumentId,
    /// Title shown in the admin list view. Required.
    pub title: String,
    /// Free-text details, searchable alongside the title.
    pub details: String,
}

impl Document {
    /// Creates a document with a generated stable ID.
    pub fn new(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            details: details.into(),
        }
    }

    /// Creates a document with a caller-provided stable ID.
    pub fn with_id(
        id: DocumentId,
        title: impl Into<String>,
        details: impl Into<String>,
    ) -> Result<Self, DocumentValidationError> {
        if id.is_nil() {
            return Err(DocumentValidationError::NilId);
        }

        let mut document = Self::new(title, details);
        document.id = id;
        Ok(document)
    }

    /// Checks the write-model invariants enforced before persistence.
    pub fn validate(&self) -> Result<(), DocumentValidationError> {
        if self.id.is_nil() {
            return Err(DocumentValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(DocumentValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
