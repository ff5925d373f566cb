//! Banner repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD plus the active/inactive collection queries over the
//!   `banners` table.
//! - Keep the window SQL in agreement with the in-memory
//!   `Banner::active_on` predicate.
//!
//! # Invariants
//! - Collection queries take the evaluation date as an explicit parameter
//!   and never consult the ambient clock.
//! - `retired` is written only by `set_retired`; `update_banner` covers the
//!   editable fields.
//! - Banner deletion is a hard delete.

use crate::model::banner::{Banner, BannerId};
use crate::repo::{ensure_connection_ready, parse_row_id, RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

const BANNER_SELECT_SQL: &str = "SELECT
    id,
    headline,
    contents,
    image,
    publish_from,
    publish_until,
    retired
FROM banners";

const BANNER_COLUMNS: &[&str] = &[
    "id",
    "headline",
    "contents",
    "image",
    "publish_from",
    "publish_until",
    "retired",
];

// A banner is shown on `on` when it is not retired and `on` falls inside
// the closed [publish_from, publish_until] interval; an unset bound leaves
// that side open.
const ACTIVE_WINDOW_SQL: &str = "retired = 0
    AND (publish_from IS NULL OR publish_from <= ?1)
    AND (publish_until IS NULL OR publish_until >= ?1)";

/// Repository interface for banner persistence and collection queries.
pub trait BannerRepository {
    /// Creates one banner and returns its stable id.
    fn create_banner(&self, banner: &Banner) -> RepoResult<BannerId>;
    /// Replaces the editable fields (headline, contents, image, window).
    ///
    /// The `retired` flag is deliberately not written here; retirement goes
    /// through [`set_retired`](Self::set_retired) and can never be undone by
    /// a stale edit.
    fn update_banner(&self, banner: &Banner) -> RepoResult<()>;
    /// Gets one banner by id regardless of its activity state.
    fn get_banner(&self, id: BannerId) -> RepoResult<Option<Banner>>;
    /// Gets one banner by id from the active collection as of `on`.
    ///
    /// Fails with [`RepoError::NotFound`] when the banner is missing *or*
    /// exists but is filtered out (retired or outside its window), so
    /// callers can tell "filtered out" from a silent default.
    fn get_active_banner(&self, id: BannerId, on: NaiveDate) -> RepoResult<Banner>;
    /// Lists every banner for administrative screens.
    fn list_banners(&self) -> RepoResult<Vec<Banner>>;
    /// Lists banners shown on `on`: not retired and inside their window.
    fn list_active_banners(&self, on: NaiveDate) -> RepoResult<Vec<Banner>>;
    /// Lists the complement of the active collection as of `on`.
    fn list_inactive_banners(&self, on: NaiveDate) -> RepoResult<Vec<Banner>>;
    /// Marks one banner as permanently retired. Idempotent.
    fn set_retired(&self, id: BannerId) -> RepoResult<()>;
    /// Hard-deletes one banner.
    fn delete_banner(&self, id: BannerId) -> RepoResult<()>;
}

/// SQLite-backed banner repository.
pub struct SqliteBannerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBannerRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "banners", BANNER_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl BannerRepository for SqliteBannerRepository<'_> {
    fn create_banner(&self, banner: &Banner) -> RepoResult<BannerId> {
        banner.validate()?;

        self.conn.execute(
            "INSERT INTO banners (
                id,
                headline,
                contents,
                image,
                publish_from,
                publish_until,
                retired
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                banner.id.to_string(),
                banner.headline.as_str(),
                banner.contents.as_str(),
                banner.image.as_str(),
                banner.publish_from,
                banner.publish_until,
                bool_to_int(banner.retired),
            ],
        )?;

        Ok(banner.id)
    }

    fn update_banner(&self, banner: &Banner) -> RepoResult<()> {
        banner.validate()?;

        let changed = self.conn.execute(
            "UPDATE banners
             SET
                headline = ?1,
                contents = ?2,
                image = ?3,
                publish_from = ?4,
                publish_until = ?5
             WHERE id = ?6;",
            params![
                banner.headline.as_str(),
                banner.contents.as_str(),
                banner.image.as_str(),
                banner.publish_from,
                banner.publish_until,
                banner.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(banner.id));
        }

        Ok(())
    }

    fn get_banner(&self, id: BannerId) -> RepoResult<Option<Banner>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BANNER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_banner_row(row)?));
        }

        Ok(None)
    }

    fn get_active_banner(&self, id: BannerId, on: NaiveDate) -> RepoResult<Banner> {
        let mut stmt = self.conn.prepare(&format!(
            "{BANNER_SELECT_SQL}
             WHERE {ACTIVE_WINDOW_SQL}
               AND id = ?2;"
        ))?;

        let mut rows = stmt.query(params![on, id.to_string()])?;
        if let Some(row) = rows.next()? {
            return parse_banner_row(row);
        }

        Err(RepoError::NotFound(id))
    }

    fn list_banners(&self) -> RepoResult<Vec<Banner>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BANNER_SELECT_SQL} ORDER BY headline ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        collect_banner_rows(&mut rows)
    }

    fn list_active_banners(&self, on: NaiveDate) -> RepoResult<Vec<Banner>> {
        let mut stmt = self.conn.prepare(&format!(
            "{BANNER_SELECT_SQL}
             WHERE {ACTIVE_WINDOW_SQL}
             ORDER BY headline ASC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![on])?;
        collect_banner_rows(&mut rows)
    }

    fn list_inactive_banners(&self, on: NaiveDate) -> RepoResult<Vec<Banner>> {
        let mut stmt = self.conn.prepare(&format!(
            "{BANNER_SELECT_SQL}
             WHERE retired = 1
                OR publish_from > ?1
                OR publish_until < ?1
             ORDER BY headline ASC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![on])?;
        collect_banner_rows(&mut rows)
    }

    fn set_retired(&self, id: BannerId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE banners SET retired = 1 WHERE id = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_banner(&self, id: BannerId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM banners WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn collect_banner_rows(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<Banner>> {
    let mut banners = Vec::new();
    while let Some(row) = rows.next()? {
        banners.push(parse_banner_row(row)?);
    }
    Ok(banners)
}

fn parse_banner_row(row: &Row<'_>) -> RepoResult<Banner> {
    let id_text: String = row.get("id")?;
    let id = parse_row_id(&id_text, "banners.id")?;

    let retired = match row.get::<_, i64>("retired")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid retired value `{other}` in banners.retired"
            )));
        }
    };

    let banner = Banner {
        id,
        headline: row.get("headline")?,
        contents: row.get("contents")?,
        image: row.get("image")?,
        publish_from: row.get("publish_from")?,
        publish_until: row.get("publish_until")?,
        retired,
    };
    banner.validate()?;
    Ok(banner)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
