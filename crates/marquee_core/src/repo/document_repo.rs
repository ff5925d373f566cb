//! Document repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and paginated listing over the `documents` table.
//! - Own the storage-maintained `modified` timestamp.
//!
//! # Invariants
//! - `modified` is set by SQL on insert and refreshed on every update;
//!   callers never supply it.
//! - Listing order is `modified DESC, id ASC` to match the admin list view.

use crate::model::document::{Document, DocumentId};
use crate::repo::{ensure_connection_ready, parse_row_id, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const DOCUMENT_SELECT_SQL: &str = "SELECT
    id,
    title,
    details,
    modified
FROM documents";

const DOCUMENT_COLUMNS: &[&str] = &["id", "title", "details", "modified"];

const DOCUMENTS_DEFAULT_LIMIT: u32 = 10;
const DOCUMENTS_LIMIT_MAX: u32 = 50;

/// Read model for document list/detail use-cases.
///
/// Carries the storage-owned `modified` timestamp in addition to the
/// editable [`Document`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Stable document id.
    pub id: DocumentId,
    /// Title shown in the admin list view.
    pub title: String,
    /// Free-text details.
    pub details: String,
    /// Last-modified timestamp in epoch milliseconds, storage-maintained.
    pub modified: i64,
}

/// Query options for document list use-cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentListQuery {
    /// Maximum rows to return. Defaults to 10 and clamps to 50.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Repository interface for document persistence.
pub trait DocumentRepository {
    /// Creates one document and returns its stable id.
    fn create_document(&self, document: &Document) -> RepoResult<DocumentId>;
    /// Replaces title and details; storage refreshes `modified`.
    fn update_document(&self, document: &Document) -> RepoResult<()>;
    /// Gets one document by id.
    fn get_document(&self, id: DocumentId) -> RepoResult<Option<DocumentRecord>>;
    /// Lists documents newest-modified first with pagination.
    fn list_documents(&self, query: &DocumentListQuery) -> RepoResult<Vec<DocumentRecord>>;
    /// Hard-deletes one document.
    fn delete_document(&self, id: DocumentId) -> RepoResult<()>;
}

/// SQLite-backed document repository.
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "documents", DOCUMENT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn create_document(&self, document: &Document) -> RepoResult<DocumentId> {
        document.validate()?;

        self.conn.execute(
            "INSERT INTO documents (id, title, details) VALUES (?1, ?2, ?3);",
            params![
                document.id.to_string(),
                document.title.as_str(),
                document.details.as_str(),
            ],
        )?;

        Ok(document.id)
    }

    fn update_document(&self, document: &Document) -> RepoResult<()> {
        document.validate()?;

        let changed = self.conn.execute(
            "UPDATE documents
             SET
                title = ?1,
                details = ?2,
                modified = (strftime('%s', 'now') * 1000)
             WHERE id = ?3;",
            params![
                document.title.as_str(),
                document.details.as_str(),
                document.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(document.id));
        }

        Ok(())
    }

    fn get_document(&self, id: DocumentId) -> RepoResult<Option<DocumentRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOCUMENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_document_row(row)?));
        }

        Ok(None)
    }

    fn list_documents(&self, query: &DocumentListQuery) -> RepoResult<Vec<DocumentRecord>> {
        let mut sql = format!("{DOCUMENT_SELECT_SQL} ORDER BY modified DESC, id ASC LIMIT ?");
        let limit = normalize_document_limit(query.limit);
        let mut bind_values: Vec<Value> = vec![Value::Integer(i64::from(limit))];

        if query.offset > 0 {
            sql.push_str(" OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }
        sql.push(';');

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut documents = Vec::new();

        while let Some(row) = rows.next()? {
            documents.push(parse_document_row(row)?);
        }

        Ok(documents)
    }

    fn delete_document(&self, id: DocumentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM documents WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

/// Normalizes list limits according to the documents contract.
pub fn normalize_document_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) => DOCUMENTS_DEFAULT_LIMIT,
        Some(value) if value > DOCUMENTS_LIMIT_MAX => DOCUMENTS_LIMIT_MAX,
        Some(value) => value,
        None => DOCUMENTS_DEFAULT_LIMIT,
    }
}

fn parse_document_row(row: &Row<'_>) -> RepoResult<DocumentRecord> {
    let id_text: String = row.get("id")?;
    let id = parse_row_id(&id_text, "documents.id")?;

    Ok(DocumentRecord {
        id,
        title: row.get("title")?,
        details: row.get("details")?,
        modified: row.get("modified")?,
    })
}
