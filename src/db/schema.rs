//! SQL DDL for all MindDump tables.
//!
//! Defines the `thoughts`, `thought_log`, and `schema_meta` tables. All DDL
//! uses `IF NOT EXISTS` for idempotent initialization. The `category` column is
//! deliberately unconstrained; category validity is checked by callers.

use rusqlite::Connection;

/// All schema DDL statements for MindDump's core tables.
const SCHEMA_SQL: &str = r#"
-- Captured thoughts, one row per submission
CREATE TABLE IF NOT EXISTS thoughts (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    content TEXT NOT NULL,
    category TEXT NOT NULL DEFAULT 'random',
    status TEXT NOT NULL DEFAULT 'thought' CHECK(status IN ('pending','done','archived','thought')),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_thoughts_user ON thoughts(user_id);
CREATE INDEX IF NOT EXISTS idx_thoughts_status ON thoughts(status);
CREATE INDEX IF NOT EXISTS idx_thoughts_category ON thoughts(category);
CREATE INDEX IF NOT EXISTS idx_thoughts_created ON thoughts(created_at);

-- Audit log
CREATE TABLE IF NOT EXISTS thought_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    operation TEXT NOT NULL CHECK(operation IN ('create','status','move','edit','delete')),
    thought_id TEXT NOT NULL,
    details TEXT,
    created_at TEXT NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
