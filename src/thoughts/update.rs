//! Dashboard edits: status changes, category moves, and content edits.
//!
//! Status changes follow [`allowed_statuses`]: anything filed as `random` can
//! only be archived, a `thought` can only be archived, and tasks move freely
//! between `pending`, `done`, and `archived`. Moves may target any category
//! except `random`. [`update_thought`] combines all three atomically.

use anyhow::{bail, Result};
use rusqlite::{params, Connection};

use super::search::get_thought;
use super::store::{validate_content, write_audit_log};
use super::types::{now_timestamp, Status, Thought};
use crate::classify::Category;

/// Statuses a thought may move to from `current`, given its stored category.
pub fn allowed_statuses(current: Status, category: &str) -> Vec<Status> {
    if category == Category::Random.as_str() {
        return if current == Status::Archived {
            vec![]
        } else {
            vec![Status::Archived]
        };
    }

    if current == Status::Thought {
        return vec![Status::Archived];
    }

    [Status::Pending, Status::Done, Status::Archived]
        .into_iter()
        .filter(|s| *s != current)
        .collect()
}

/// Change a thought's status, enforcing [`allowed_statuses`].
pub fn set_status(
    conn: &mut Connection,
    user_id: &str,
    id: &str,
    status: Status,
) -> Result<Thought> {
    let tx = conn.transaction()?;
    let updated = apply_status(&tx, user_id, id, status)?;
    tx.commit()?;
    Ok(updated)
}

/// Move a thought to another category.
pub fn move_thought(
    conn: &mut Connection,
    user_id: &str,
    id: &str,
    category: Category,
) -> Result<Thought> {
    let tx = conn.transaction()?;
    let updated = apply_move(&tx, user_id, id, category)?;
    tx.commit()?;
    Ok(updated)
}

/// Replace a thought's content. Category and status are left alone.
pub fn edit_content(
    conn: &mut Connection,
    user_id: &str,
    id: &str,
    content: &str,
) -> Result<Thought> {
    let tx = conn.transaction()?;
    let updated = apply_edit(&tx, user_id, id, content)?;
    tx.commit()?;
    Ok(updated)
}

/// A combined edit. Fields left `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct ThoughtUpdate {
    pub content: Option<String>,
    pub category: Option<Category>,
    pub status: Option<Status>,
}

impl ThoughtUpdate {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.category.is_none() && self.status.is_none()
    }
}

/// Apply content, then category, then status in one transaction.
///
/// The status is checked against the category the thought has after the
/// move. If any step is rejected nothing is written.
pub fn update_thought(
    conn: &mut Connection,
    user_id: &str,
    id: &str,
    update: &ThoughtUpdate,
) -> Result<Thought> {
    if update.is_empty() {
        bail!("nothing to update: give content, category, or status");
    }

    let tx = conn.transaction()?;
    let mut thought = get_thought(&tx, user_id, id)?;
    if let Some(content) = &update.content {
        thought = apply_edit(&tx, user_id, id, content)?;
    }
    if let Some(category) = update.category {
        thought = apply_move(&tx, user_id, id, category)?;
    }
    if let Some(status) = update.status {
        thought = apply_status(&tx, user_id, id, status)?;
    }
    tx.commit()?;

    Ok(thought)
}

fn apply_status(tx: &Connection, user_id: &str, id: &str, status: Status) -> Result<Thought> {
    let thought = get_thought(tx, user_id, id)?;

    if !allowed_statuses(thought.status, &thought.category).contains(&status) {
        bail!(
            "cannot change {} thought from {} to {}",
            thought.category,
            thought.status,
            status
        );
    }

    tx.execute(
        "UPDATE thoughts SET status = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
        params![status.as_str(), now_timestamp(), id, user_id],
    )?;
    write_audit_log(
        tx,
        "status",
        id,
        Some(&serde_json::json!({"from": thought.status, "to": status})),
    )?;

    tracing::info!(id, from = %thought.status, to = %status, "thought status changed");
    get_thought(tx, user_id, id)
}

fn apply_move(tx: &Connection, user_id: &str, id: &str, category: Category) -> Result<Thought> {
    if category == Category::Random {
        bail!("thoughts cannot be moved to random");
    }

    let thought = get_thought(tx, user_id, id)?;

    tx.execute(
        "UPDATE thoughts SET category = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
        params![category.as_str(), now_timestamp(), id, user_id],
    )?;
    write_audit_log(
        tx,
        "move",
        id,
        Some(&serde_json::json!({"from": thought.category, "to": category})),
    )?;

    tracing::info!(id, from = %thought.category, to = %category, "thought moved");
    get_thought(tx, user_id, id)
}

fn apply_edit(tx: &Connection, user_id: &str, id: &str, content: &str) -> Result<Thought> {
    let content = validate_content(content)?;
    get_thought(tx, user_id, id)?;

    tx.execute(
        "UPDATE thoughts SET content = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
        params![content, now_timestamp(), id, user_id],
    )?;
    write_audit_log(tx, "edit", id, None)?;

    get_thought(tx, user_id, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_thoughts_can_only_be_archived() {
        assert_eq!(allowed_statuses(Status::Pending, "random"), vec![Status::Archived]);
        assert_eq!(allowed_statuses(Status::Thought, "random"), vec![Status::Archived]);
        assert!(allowed_statuses(Status::Archived, "random").is_empty());
    }

    #[test]
    fn reflections_can_only_be_archived() {
        assert_eq!(allowed_statuses(Status::Thought, "idea"), vec![Status::Archived]);
    }

    #[test]
    fn tasks_move_between_other_statuses() {
        assert_eq!(
            allowed_statuses(Status::Pending, "work"),
            vec![Status::Done, Status::Archived]
        );
        assert_eq!(
            allowed_statuses(Status::Done, "work"),
            vec![Status::Pending, Status::Archived]
        );
        assert_eq!(
            allowed_statuses(Status::Archived, "shopping"),
            vec![Status::Pending, Status::Done]
        );
    }
}
