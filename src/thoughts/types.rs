//! Thought record and status definitions.
//!
//! Defines [`Status`] (the lifecycle of a captured note) and [`Thought`] (a
//! full row of the `thoughts` table).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::ThoughtType;

/// Lifecycle state of a captured thought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// An open task.
    Pending,
    /// A completed task.
    Done,
    /// Put away; hidden from focus mode.
    Archived,
    /// A reflection with nothing to do.
    Thought,
}

impl Status {
    pub const ALL: [Status; 4] = [Self::Pending, Self::Done, Self::Archived, Self::Thought];

    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
            Self::Archived => "archived",
            Self::Thought => "thought",
        }
    }

    /// Initial status for a freshly classified note.
    pub fn for_type(thought_type: ThoughtType) -> Self {
        match thought_type {
            ThoughtType::Task => Self::Pending,
            ThoughtType::Thought => Self::Thought,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            "archived" => Ok(Self::Archived),
            "thought" => Ok(Self::Thought),
            _ => Err(format!("unknown status: {s}")),
        }
    }
}

/// A thought record, matching the `thoughts` table schema.
///
/// `category` is kept as the stored string: the column is not constrained, so
/// rows written by other tools may hold values outside the closed set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    /// Owner of this thought.
    pub user_id: String,
    /// The note text as submitted (trimmed).
    pub content: String,
    /// Category wire name, e.g. `"work"`.
    pub category: String,
    pub status: Status,
    /// `"model"` or `"fallback"`; `None` for rows captured before provenance was tracked.
    pub provenance: Option<String>,
    /// RFC 3339 UTC creation timestamp (millisecond precision).
    pub created_at: String,
    /// RFC 3339 UTC last-modification timestamp.
    pub updated_at: String,
}

/// Column list matching [`Thought::from_row`].
pub(crate) const THOUGHT_COLUMNS: &str =
    "id, user_id, content, category, status, provenance, created_at, updated_at";

impl Thought {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        let status: String = row.get(4)?;
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            content: row.get(2)?,
            category: row.get(3)?,
            status: status.parse().map_err(|e: String| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    rusqlite::types::Type::Text,
                    e.into(),
                )
            })?,
            provenance: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

/// Fixed-width timestamp so lexical order in SQL matches time order.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time via [`format_timestamp`].
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_follows_type() {
        assert_eq!(Status::for_type(ThoughtType::Task), Status::Pending);
        assert_eq!(Status::for_type(ThoughtType::Thought), Status::Thought);
    }

    #[test]
    fn status_round_trips() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert!("urgent".parse::<Status>().is_err());
    }

    #[test]
    fn timestamps_are_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        assert_eq!(format_timestamp(whole), "2026-10-19T08:00:00.000Z");
        assert_eq!(now_timestamp().len(), 24);
    }
}
