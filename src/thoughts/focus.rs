//! Focus mode: work through open tasks one at a time, oldest first.

use anyhow::Result;
use rusqlite::{params, Connection};

use super::types::{Status, Thought, THOUGHT_COLUMNS};

/// Open tasks for focus mode: status `pending`, not filed as `random`, oldest first.
pub fn focus_queue(conn: &Connection, user_id: &str) -> Result<Vec<Thought>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {THOUGHT_COLUMNS} FROM thoughts \
         WHERE user_id = ?1 AND status = 'pending' AND category != 'random' \
         ORDER BY created_at ASC, id ASC"
    ))?;
    let queue = stmt
        .query_map(params![user_id], Thought::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(queue)
}

/// Mark a focus item done and return what is left in the queue.
pub fn complete_focus_item(
    conn: &mut Connection,
    user_id: &str,
    id: &str,
) -> Result<Vec<Thought>> {
    super::update::set_status(conn, user_id, id, Status::Done)?;
    focus_queue(conn, user_id)
}
