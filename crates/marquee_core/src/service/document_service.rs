//! Document use-case service.
//!
//! # Responsibility
//! - Provide document create/edit/get/list/delete APIs for the admin
//!   screens.
//! - Normalize list pagination according to the documents contract.
//!
//! # Invariants
//! - Edits use full replacement semantics; storage refreshes `modified`.
//! - Document list is always sorted by `modified DESC, id ASC`.

use crate::model::document::{Document, DocumentId, DocumentValidationError};
use crate::repo::document_repo::{
    normalize_document_limit, DocumentListQuery, DocumentRecord, DocumentRepository,
};
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for document use-cases.
#[derive(Debug)]
pub enum DocumentServiceError {
    /// Write model failed validation.
    InvalidDocument(DocumentValidationError),
    /// Target document does not exist.
    DocumentNotFound(DocumentId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for DocumentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDocument(err) => write!(f, "{err}"),
            Self::DocumentNotFound(id) => write!(f, "document not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent document state: {details}")
            }
        }
    }
}

impl Error for DocumentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDocument(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for DocumentServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::DocumentNotFound(id),
            RepoError::Document(err) => Self::InvalidDocument(err),
            other => Self::Repo(other),
        }
    }
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentsListResult {
    /// List items sorted by `modified DESC, id ASC`.
    pub items: Vec<DocumentRecord>,
    /// Effective normalized limit used by the query.
    pub applied_limit: u32,
}

/// Document service facade over repository implementations.
pub struct DocumentService<R: DocumentRepository> {
    repo: R,
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one document and returns the stored row with its
    /// storage-assigned `modified` timestamp.
    pub fn create_document(
        &self,
        title: impl Into<String>,
        details: impl Into<String>,
    ) -> Result<DocumentRecord, DocumentServiceError> {
        let document = Document::new(title, details);
        let id = self.repo.create_document(&document)?;
        self.read_back(id, "created document not found in read-back")
    }

    /// Replaces title and details of an existing document.
    pub fn edit_document(
        &self,
        id: DocumentId,
        title: impl Into<String>,
        details: impl Into<String>,
    ) -> Result<DocumentRecord, DocumentServiceError> {
        let document =
            Document::with_id(id, title, details).map_err(DocumentServiceError::InvalidDocument)?;
        self.repo.update_document(&document)?;
        self.read_back(id, "edited document not found in read-back")
    }

    /// Gets one document by stable ID.
    pub fn get_document(&self, id: DocumentId) -> RepoResult<Option<DocumentRecord>> {
        self.repo.get_document(id)
    }

    /// Lists documents newest-modified first with pagination.
    pub fn list_documents(
        &self,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<DocumentsListResult, DocumentServiceError> {
        let applied_limit = normalize_document_limit(limit);
        let query = DocumentListQuery {
            limit: Some(applied_limit),
            offset,
        };
        let items = self.repo.list_documents(&query)?;
        Ok(DocumentsListResult {
            items,
            applied_limit,
        })
    }

    /// Hard-deletes one document.
    pub fn delete_document(&self, id: DocumentId) -> Result<(), DocumentServiceError> {
        self.repo.delete_document(id)?;
        Ok(())
    }

    fn read_back(
        &self,
        id: DocumentId,
        missing: &'static str,
    ) -> Result<DocumentRecord, DocumentServiceError> {
        self.repo
            .get_document(id)?
            .ok_or(DocumentServiceError::InconsistentState(missing))
    }
}
