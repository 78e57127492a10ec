#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use minddump::classify::{Category, Classification, Classifier, ParsePath, Provenance, ThoughtType};
use rusqlite::Connection;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const USER: &str = "alice";

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    minddump::db::open_memory_database().unwrap()
}

/// Classifier that always answers the same pair and counts its calls.
pub struct StaticClassifier {
    pub category: Category,
    pub thought_type: ThoughtType,
    pub calls: AtomicUsize,
}

impl StaticClassifier {
    pub fn new(category: Category, thought_type: ThoughtType) -> Self {
        Self {
            category,
            thought_type,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for StaticClassifier {
    fn name(&self) -> &str {
        "static"
    }

    async fn classify(&self, _text: &str) -> Classification {
        self.calls.fetch_add(1, Ordering::SeqCst);
        model_result(self.category, self.thought_type)
    }
}

/// A model-derived classification.
pub fn model_result(category: Category, thought_type: ThoughtType) -> Classification {
    Classification {
        category,
        thought_type,
        provenance: Provenance::Model(ParsePath::Json),
    }
}

/// Insert a thought for [`USER`] directly via the store module. Returns the ID.
pub fn insert_thought(
    conn: &mut Connection,
    content: &str,
    category: Category,
    thought_type: ThoughtType,
) -> String {
    insert_thought_at(conn, USER, content, category, thought_type, Utc::now())
}

/// Insert a thought with an explicit owner and creation time. Returns the ID.
pub fn insert_thought_at(
    conn: &mut Connection,
    user_id: &str,
    content: &str,
    category: Category,
    thought_type: ThoughtType,
    created_at: DateTime<Utc>,
) -> String {
    minddump::thoughts::store::store_thought_at(
        conn,
        user_id,
        content,
        &model_result(category, thought_type),
        created_at,
    )
    .unwrap()
    .id
}

/// Count audit log rows for one thought and operation.
pub fn log_count(conn: &Connection, thought_id: &str, operation: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM thought_log WHERE thought_id = ?1 AND operation = ?2",
        [thought_id, operation],
        |row| row.get(0),
    )
    .unwrap()
}
