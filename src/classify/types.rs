//! Closed vocabularies produced by the classifier.
//!
//! [`Category`] is the eight-member topical tag set and [`ThoughtType`] the
//! task/thought split. Both serialize to the exact lowercase wire names that
//! the store and every client agree on.

use serde::{Deserialize, Serialize};

/// Topical tag assigned to a thought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Shopping,
    Idea,
    Personal,
    Reminder,
    Health,
    Travel,
    /// Catch-all for anything the classifier could not place.
    Random,
}

impl Category {
    /// Every category, in the order partial matching walks them.
    pub const ALL: [Category; 8] = [
        Self::Work,
        Self::Shopping,
        Self::Idea,
        Self::Personal,
        Self::Reminder,
        Self::Health,
        Self::Travel,
        Self::Random,
    ];

    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Shopping => "shopping",
            Self::Idea => "idea",
            Self::Personal => "personal",
            Self::Reminder => "reminder",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Random => "random",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Whether a thought is something to act on or something to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThoughtType {
    /// Actionable: buy, call, finish, book.
    Task,
    /// A reflection, observation, or idea with no clear action.
    Thought,
}

impl ThoughtType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Thought => "thought",
        }
    }
}

impl std::fmt::Display for ThoughtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThoughtType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(Self::Task),
            "thought" => Ok(Self::Thought),
            _ => Err(format!("unknown thought type: {s}")),
        }
    }
}
