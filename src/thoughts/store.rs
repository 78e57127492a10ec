//! Write path: classify, insert, and audit.
//!
//! [`capture_thought`] is the submission flow: it asks a [`Classifier`] for a
//! category and type, then hands the result to [`store_thought`], which runs
//! the insert and the audit log entry inside one transaction. Classification
//! cannot fail, so a capture only fails on empty input or a storage error.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::Serialize;

use super::types::{format_timestamp, Status};
use crate::classify::{Category, Classification, Classifier, Provenance, ThoughtType};

/// Result returned from a capture.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureResult {
    /// UUID of the stored thought.
    pub id: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub thought_type: ThoughtType,
    /// Initial status derived from the type.
    pub status: Status,
    pub provenance: Provenance,
    pub created_at: String,
}

/// Trim note text, rejecting input that is empty once trimmed.
pub fn validate_content(content: &str) -> Result<&str> {
    let content = content.trim();
    if content.is_empty() {
        bail!("thought content must not be empty");
    }
    Ok(content)
}

/// Classify `content` and store it for `user_id`.
pub async fn capture_thought(
    conn: &mut Connection,
    classifier: &dyn Classifier,
    user_id: &str,
    content: &str,
) -> Result<CaptureResult> {
    let content = validate_content(content)?;

    let classification = classifier.classify(content).await;
    if classification.is_fallback() {
        tracing::info!(
            classifier = classifier.name(),
            provenance = ?classification.provenance,
            "storing thought with fallback classification"
        );
    }

    store_thought(conn, user_id, content, &classification)
}

/// Store an already-classified thought, timestamped now.
pub fn store_thought(
    conn: &mut Connection,
    user_id: &str,
    content: &str,
    classification: &Classification,
) -> Result<CaptureResult> {
    store_thought_at(conn, user_id, content, classification, Utc::now())
}

/// Store an already-classified thought with an explicit creation time.
pub fn store_thought_at(
    conn: &mut Connection,
    user_id: &str,
    content: &str,
    classification: &Classification,
    created_at: DateTime<Utc>,
) -> Result<CaptureResult> {
    let content = validate_content(content)?;

    let id = uuid::Uuid::now_v7().to_string();
    let status = Status::for_type(classification.thought_type);
    let created_at = format_timestamp(created_at);

    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO thoughts (id, user_id, content, category, status, provenance, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            id,
            user_id,
            content,
            classification.category.as_str(),
            status.as_str(),
            classification.provenance.as_str(),
            created_at,
        ],
    )?;

    write_audit_log(
        &tx,
        "create",
        &id,
        Some(&serde_json::json!({
            "category": classification.category,
            "type": classification.thought_type,
            "provenance": classification.provenance,
        })),
    )?;

    tx.commit()?;

    tracing::info!(
        id = %id,
        category = %classification.category,
        status = %status,
        "thought stored"
    );

    Ok(CaptureResult {
        id,
        category: classification.category,
        thought_type: classification.thought_type,
        status,
        provenance: classification.provenance,
        created_at,
    })
}

/// Write an entry to the thought_log audit table.
pub(crate) fn write_audit_log(
    conn: &Connection,
    operation: &str,
    thought_id: &str,
    details: Option<&serde_json::Value>,
) -> Result<()> {
    let now = super::types::now_timestamp();
    let details_json = details.map(|d| d.to_string());
    conn.execute(
        "INSERT INTO thought_log (operation, thought_id, details, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![operation, thought_id, details_json, now],
    )?;
    Ok(())
}
