use marquee_core::db::migrations::{apply_migrations, latest_version};
use marquee_core::db::{open_db, open_db_in_memory, DbError};
use marquee_core::{
    search_documents, Banner, BannerRepository, DocumentSearchQuery, RepoError,
    SqliteBannerRepository, SqliteDocumentRepository,
};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "banners");
    assert_table_exists(&conn, "documents");
    assert_table_exists(&conn, "documents_fts");
}

#[test]
fn opening_same_database_twice_is_idempotent_and_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marquee.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    let repo = SqliteBannerRepository::try_new(&conn_first).unwrap();
    let banner = Banner::new("Persisted", "", "");
    repo.create_banner(&banner).unwrap();
    drop(repo);
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let repo = SqliteBannerRepository::try_new(&conn_second).unwrap();
    let loaded = repo.get_banner(banner.id).unwrap().unwrap();
    assert_eq!(loaded.headline, "Persisted");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fts_migration_backfills_documents_created_before_it() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    conn.execute_batch(include_str!("../src/db/migrations/0001_init.sql"))
        .unwrap();
    conn.execute_batch(
        "INSERT INTO documents (id, title, details)
         VALUES ('11111111-2222-4333-8444-555555555555', 'Legacy handbook', 'legacy indexed term');",
    )
    .unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();

    apply_migrations(&mut conn).unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let hits = search_documents(&conn, &DocumentSearchQuery::new("legacy")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Legacy handbook");
}

#[test]
fn repositories_reject_uninitialized_connections() {
    let conn = Connection::open_in_memory().unwrap();

    for result in [
        SqliteBannerRepository::try_new(&conn).map(|_| ()),
        SqliteDocumentRepository::try_new(&conn).map(|_| ()),
    ] {
        match result {
            Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version: 0,
            }) => assert!(expected_version > 0),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(()) => panic!("expected uninitialized connection error"),
        }
    }
}

#[test]
fn repositories_reject_connections_missing_required_tables() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteBannerRepository::try_new(&conn).map(|_| ()),
        Err(RepoError::MissingRequiredTable("banners"))
    ));
    assert!(matches!(
        SqliteDocumentRepository::try_new(&conn).map(|_| ()),
        Err(RepoError::MissingRequiredTable("documents"))
    ));
}

#[test]
fn banner_repository_rejects_missing_retired_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE banners (
            id            TEXT PRIMARY KEY NOT NULL,
            headline      TEXT NOT NULL,
            contents      TEXT NOT NULL DEFAULT '',
            image         TEXT NOT NULL DEFAULT '',
            publish_from  TEXT,
            publish_until TEXT
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteBannerRepository::try_new(&conn).map(|_| ()),
        Err(RepoError::MissingRequiredColumn {
            table: "banners",
            column: "retired"
        })
    ));
}

#[test]
fn document_repository_rejects_missing_modified_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE documents (
            id      TEXT PRIMARY KEY NOT NULL,
            title   TEXT NOT NULL,
            details TEXT NOT NULL DEFAULT ''
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteDocumentRepository::try_new(&conn).map(|_| ()),
        Err(RepoError::MissingRequiredColumn {
            table: "documents",
            column: "modified"
        })
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
