//! Thought deletion.
//!
//! Deletes are hard: the row is removed and only the audit log remembers it.

use anyhow::{bail, Result};
use rusqlite::{params, Connection};
use serde::Serialize;

use super::store::write_audit_log;

/// Result returned from a delete.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    /// ID of the deleted thought.
    pub id: String,
}

/// Delete one thought owned by `user_id`.
pub fn delete_thought(conn: &mut Connection, user_id: &str, id: &str) -> Result<DeleteResult> {
    let tx = conn.transaction()?;

    let rows = tx.execute(
        "DELETE FROM thoughts WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    if rows == 0 {
        bail!("thought not found: {id}");
    }
    write_audit_log(&tx, "delete", id, None)?;

    tx.commit()?;

    tracing::info!(id, "thought deleted");
    Ok(DeleteResult { id: id.to_string() })
}

/// Delete every thought of a user. Returns the number removed.
pub fn reset_thoughts(conn: &mut Connection, user_id: &str) -> Result<usize> {
    let tx = conn.transaction()?;

    let ids: Vec<String> = tx
        .prepare("SELECT id FROM thoughts WHERE user_id = ?1")?
        .query_map(params![user_id], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for id in &ids {
        write_audit_log(&tx, "delete", id, Some(&serde_json::json!({"reason": "reset"})))?;
    }
    tx.execute("DELETE FROM thoughts WHERE user_id = ?1", params![user_id])?;

    tx.commit()?;

    tracing::info!(user_id, count = ids.len(), "thoughts reset");
    Ok(ids.len())
}
