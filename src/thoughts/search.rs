//! Read path: single lookups, dashboard listing, urgency, and export.
//!
//! Every query is scoped to one `user_id`. Listing returns newest first and
//! applies the dashboard filters: a category (or the `thoughts` pseudo
//! category, meaning status `thought`), a status (or `urgent`, meaning the
//! content mentions a deadline word), and a case-insensitive text search.

use anyhow::{anyhow, Result};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::types::{Status, Thought, THOUGHT_COLUMNS};
use crate::classify::Category;

/// Words that flag a thought as time-sensitive. Matched as plain substrings
/// of the lowercased content.
pub const URGENCY_KEYWORDS: &[&str] = &[
    "tomorrow",
    "tonight",
    "asap",
    "by evening",
    "next hour",
    "urgent",
    "immediately",
    "right now",
    "today",
    "this morning",
    "this afternoon",
    "deadline",
    "due",
    "emergency",
    "now",
];

/// True if the content mentions any [`URGENCY_KEYWORDS`] entry.
pub fn has_urgency(content: &str) -> bool {
    let lower = content.to_lowercase();
    URGENCY_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Category side of the dashboard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(Category),
    /// Everything with status `thought`, whatever its category.
    Thoughts,
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "thoughts" => Ok(Self::Thoughts),
            other => other.parse().map(Self::Category),
        }
    }
}

/// Status side of the dashboard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(Status),
    /// Content contains an urgency keyword.
    Urgent,
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "urgent" => Ok(Self::Urgent),
            other => other.parse().map(Self::Status),
        }
    }
}

/// Dashboard listing filter. The default lists everything.
#[derive(Debug, Clone, Default)]
pub struct ThoughtFilter {
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub search: Option<String>,
}

/// Fetch one thought owned by `user_id`.
pub fn get_thought(conn: &Connection, user_id: &str, id: &str) -> Result<Thought> {
    conn.query_row(
        &format!("SELECT {THOUGHT_COLUMNS} FROM thoughts WHERE id = ?1 AND user_id = ?2"),
        params![id, user_id],
        Thought::from_row,
    )
    .optional()?
    .ok_or_else(|| anyhow!("thought not found: {id}"))
}

/// List a user's thoughts, newest first, with dashboard filters applied.
pub fn list_thoughts(conn: &Connection, user_id: &str, filter: &ThoughtFilter) -> Result<Vec<Thought>> {
    let mut sql = format!("SELECT {THOUGHT_COLUMNS} FROM thoughts WHERE user_id = ?1");
    let mut args: Vec<String> = vec![user_id.to_string()];

    match filter.category {
        CategoryFilter::All => {}
        CategoryFilter::Category(category) => {
            args.push(category.as_str().to_string());
            sql.push_str(&format!(" AND category = ?{}", args.len()));
        }
        CategoryFilter::Thoughts => sql.push_str(" AND status = 'thought'"),
    }

    if let StatusFilter::Status(status) = filter.status {
        args.push(status.as_str().to_string());
        sql.push_str(&format!(" AND status = ?{}", args.len()));
    }

    sql.push_str(" ORDER BY created_at DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let thoughts = stmt
        .query_map(params_from_iter(args.iter()), Thought::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    Ok(thoughts
        .into_iter()
        .filter(|t| filter.status != StatusFilter::Urgent || has_urgency(&t.content))
        .filter(|t| match &needle {
            Some(needle) => t.content.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect())
}

/// Every thought of a user, oldest first, for export.
pub fn export_thoughts(conn: &Connection, user_id: &str) -> Result<Vec<Thought>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {THOUGHT_COLUMNS} FROM thoughts WHERE user_id = ?1 ORDER BY created_at, id"
    ))?;
    let thoughts = stmt
        .query_map(params![user_id], Thought::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(thoughts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_keywords() {
        assert!(has_urgency("Submit report by TOMORROW"));
        assert!(has_urgency("call the bank right now"));
        assert!(has_urgency("rent is due friday"));
        assert!(!has_urgency("I like sunsets"));
        // plain substring match, same as the dashboard badge
        assert!(has_urgency("I know a place"));
    }

    #[test]
    fn parse_filters() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "thoughts".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Thoughts
        );
        assert_eq!(
            "health".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Category(Category::Health)
        );
        assert!("Health".parse::<CategoryFilter>().is_err());

        assert_eq!("urgent".parse::<StatusFilter>().unwrap(), StatusFilter::Urgent);
        assert_eq!(
            "done".parse::<StatusFilter>().unwrap(),
            StatusFilter::Status(Status::Done)
        );
        assert!("finished".parse::<StatusFilter>().is_err());
    }
}
