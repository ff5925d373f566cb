//! SQLite FTS5-based document search.
//!
//! # Responsibility
//! - Provide keyword search over document title and details.
//! - Return typed hits with stable IDs.
//!
//! # Invariants
//! - Result ordering is deterministic by rank, `modified`, then id.
//! - User text is escaped by default so the admin search box cannot trip
//!   FTS5 syntax errors.

use crate::db::DbError;
use crate::model::document::DocumentId;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for query parsing, DB interaction and result decoding.
#[derive(Debug)]
pub enum SearchError {
    /// User-provided query cannot be parsed by FTS5 syntax.
    InvalidQuery { query: String, message: String },
    Db(DbError),
    InvalidData(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery { query, message } => {
                write!(f, "invalid full-text query `{query}`: {message}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid search row: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for SearchError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SearchError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Search options for the document full-text query.
#[derive(Debug, Clone)]
pub struct DocumentSearchQuery {
    /// User query text.
    pub text: String,
    /// Maximum number of hits to return.
    pub limit: u32,
    /// Whether to pass text directly as a raw FTS5 expression.
    ///
    /// Default is `false` so interactive search input never produces
    /// syntax errors.
    pub raw_fts_syntax: bool,
}

impl DocumentSearchQuery {
    /// Creates a query with the default limit and escaped syntax.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: 20,
            raw_fts_syntax: false,
        }
    }
}

/// Single search hit returned by [`search_documents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSearchHit {
    pub document_id: DocumentId,
    pub title: String,
    /// Highlighted snippet taken from the details column.
    pub snippet: String,
}

/// Searches documents via FTS5 and returns ranked results.
///
/// Matches against both indexed columns (title and details). Returns an
/// empty list for blank queries and for `limit == 0`.
pub fn search_documents(
    conn: &Connection,
    query: &DocumentSearchQuery,
) -> SearchResult<Vec<DocumentSearchHit>> {
    let Some(match_expr) = build_match_expression(query) else {
        return Ok(Vec::new());
    };

    if query.limit == 0 {
        return Ok(Vec::new());
    }

    let mut stmt = conn.prepare(
        "SELECT
            documents.id AS id,
            documents.title AS title,
            snippet(documents_fts, 1, '[', ']', ' ... ', 10) AS snippet
         FROM documents_fts
         JOIN documents ON documents.rowid = documents_fts.rowid
         WHERE documents_fts MATCH ?1
         ORDER BY bm25(documents_fts), documents.modified DESC, documents.id ASC
         LIMIT ?2;",
    )?;

    let mut rows = stmt
        .query(params![match_expr, i64::from(query.limit)])
        .map_err(|err| map_query_error(err, &match_expr))?;
    let mut hits = Vec::new();

    while let Some(row) = rows
        .next()
        .map_err(|err| map_query_error(err, &match_expr))?
    {
        hits.push(parse_search_hit(row)?);
    }

    Ok(hits)
}

fn parse_search_hit(row: &Row<'_>) -> SearchResult<DocumentSearchHit> {
    let id_text: String = row.get("id")?;
    let document_id = Uuid::parse_str(&id_text)
        .map_err(|_| SearchError::InvalidData(format!("invalid uuid `{id_text}`")))?;

    Ok(DocumentSearchHit {
        document_id,
        title: row.get("title")?,
        snippet: row.get("snippet")?,
    })
}

fn build_match_expression(query: &DocumentSearchQuery) -> Option<String> {
    let text = query.text.trim();
    if text.is_empty() {
        return None;
    }

    if query.raw_fts_syntax {
        return Some(text.to_string());
    }

    let terms = text
        .split_whitespace()
        .map(escape_fts_term)
        .collect::<Vec<_>>();

    if terms.is_empty() {
        return None;
    }

    Some(terms.join(" AND "))
}

fn escape_fts_term(raw: &str) -> String {
    let escaped = raw.replace('"', "\"\"");
    format!("\"{escaped}\"")
}

fn map_query_error(err: rusqlite::Error, query: &str) -> SearchError {
    if is_match_syntax_error(&err) {
        return SearchError::InvalidQuery {
            query: query.to_string(),
            message: err.to_string(),
        };
    }

    SearchError::Db(DbError::Sqlite(err))
}

fn is_match_syntax_error(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(message)) => {
            let msg = message.to_lowercase();
            (msg.contains("fts5") && msg.contains("syntax"))
                || msg.contains("malformed match expression")
                || msg.contains("unterminated")
        }
        _ => false,
    }
}
