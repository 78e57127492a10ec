use minddump::db::{self, migrations};
use rusqlite::Connection;

#[test]
fn open_database_creates_file_and_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("thoughts.db");

    let conn = db::open_database(&path).unwrap();
    assert!(path.exists());

    let mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode, "wal");

    let timeout: i64 = conn
        .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
        .unwrap();
    assert_eq!(timeout, 5000);

    assert_eq!(
        migrations::get_schema_version(&conn).unwrap(),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn reopening_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thoughts.db");

    {
        let conn = db::open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO thoughts (id, user_id, content, category, status, created_at, updated_at) \
             VALUES ('t1', 'u', 'hello', 'idea', 'thought', '2026-01-01T00:00:00.000Z', '2026-01-01T00:00:00.000Z')",
            [],
        )
        .unwrap();
    }

    let conn = db::open_database(&path).unwrap();
    let report = db::check_database_health(&conn).unwrap();
    assert!(report.integrity_ok);
    assert_eq!(report.thought_count, 1);
    assert_eq!(report.schema_version, migrations::CURRENT_SCHEMA_VERSION);
}

#[test]
fn v1_database_is_migrated_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thoughts.db");

    {
        let conn = Connection::open(&path).unwrap();
        db::schema::init_schema(&conn).unwrap();
        assert!(!migrations::has_column(&conn, "thoughts", "provenance").unwrap());
        conn.execute(
            "INSERT INTO thoughts (id, user_id, content, category, status, created_at, updated_at) \
             VALUES ('old', 'u', 'from before', 'work', 'pending', '2026-01-01T00:00:00.000Z', '2026-01-01T00:00:00.000Z')",
            [],
        )
        .unwrap();
    }

    let conn = db::open_database(&path).unwrap();
    assert!(migrations::has_column(&conn, "thoughts", "provenance").unwrap());

    let provenance: Option<String> = conn
        .query_row("SELECT provenance FROM thoughts WHERE id = 'old'", [], |row| row.get(0))
        .unwrap();
    assert_eq!(provenance, None);
}

#[test]
fn status_check_constraint_rejects_unknown_values() {
    let conn = db::open_memory_database().unwrap();
    let result = conn.execute(
        "INSERT INTO thoughts (id, user_id, content, category, status, created_at, updated_at) \
         VALUES ('t', 'u', 'x', 'work', 'finished', '2026-01-01T00:00:00.000Z', '2026-01-01T00:00:00.000Z')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn health_report_on_fresh_database() {
    let conn = db::open_memory_database().unwrap();
    let report = db::check_database_health(&conn).unwrap();
    assert!(report.integrity_ok);
    assert_eq!(report.integrity_details, "ok");
    assert_eq!(report.thought_count, 0);
    assert_eq!(report.log_count, 0);
}
