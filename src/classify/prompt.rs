//! Prompt construction and completion parsing.
//!
//! The model is asked for a two-field JSON object. What comes back is
//! best-effort text, so [`parse_completion`] first looks for a `{...}` span it
//! can parse and otherwise scrapes `category: xxx` / `type: xxx` pairs out of
//! the prose. Either way the captured values go through the normalizers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::normalize::{
    normalize_category, normalize_category_value, normalize_type, normalize_type_value,
};
use super::types::{Category, ThoughtType};

static JSON_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]*\}").expect("valid json span regex"));
static CATEGORY_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)category["\s:]*([a-zA-Z]+)"#).expect("valid category field regex")
});
static TYPE_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)type["\s:]*([a-zA-Z]+)"#).expect("valid type field regex"));

/// How a model completion was turned into a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePath {
    /// A JSON object was found and parsed.
    Json,
    /// No parseable JSON; fields were scraped with patterns (or defaulted).
    Pattern,
}

/// Build the few-shot classification prompt for one note.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following user input and provide a JSON response with two determinations:

1. CATEGORY: Categorize into one of these exact categories: work, shopping, idea, personal, reminder, health, travel, random
2. TYPE: Determine if this is an actionable task or just a thought/statement

IMPORTANT INSTRUCTIONS:
- Respond with valid JSON only: {{"category": "...", "type": "..."}}
- Category must be one of: work, shopping, idea, personal, reminder, health, travel, random
- Type must be either "task" or "thought"

TYPE DEFINITIONS:
- "task": Something actionable the user can do, complete, or accomplish (e.g., "buy groceries", "call mom", "finish report", "go for a run")
- "thought": A reflection, idea, statement, or observation without a clear action (e.g., "I love sunsets", "wondering about life", "feeling grateful", "random idea about flying cars")

EXAMPLES:
- "Buy groceries tomorrow" → {{"category": "shopping", "type": "task"}}
- "I love how peaceful mornings are" → {{"category": "personal", "type": "thought"}}
- "Schedule dentist appointment" → {{"category": "health", "type": "task"}}
- "What if we could teleport?" → {{"category": "idea", "type": "thought"}}
- "Finish the quarterly report" → {{"category": "work", "type": "task"}}
- "Feeling grateful for my family" → {{"category": "personal", "type": "thought"}}

User input: "{text}"

JSON Response:"#
    )
}

/// Turn raw completion text into a normalized category and type.
pub fn parse_completion(raw: &str) -> (Category, ThoughtType, ParsePath) {
    if let Some(span) = JSON_SPAN_RE.find(raw) {
        match serde_json::from_str::<serde_json::Value>(span.as_str()) {
            Ok(parsed) => {
                let category = normalize_category_value(parsed.get("category"));
                let thought_type = normalize_type_value(parsed.get("type"));
                return (category, thought_type, ParsePath::Json);
            }
            Err(e) => {
                tracing::debug!(error = %e, span = span.as_str(), "completion JSON did not parse");
            }
        }
    }

    let category = capture_field(&CATEGORY_FIELD_RE, raw);
    let thought_type = capture_field(&TYPE_FIELD_RE, raw);
    tracing::debug!(?category, ?thought_type, "scraped fields from completion text");

    (
        normalize_category(Some(category.unwrap_or("random"))),
        normalize_type(Some(thought_type.unwrap_or("thought"))),
        ParsePath::Pattern,
    )
}

fn capture_field<'a>(re: &Regex, raw: &'a str) -> Option<&'a str> {
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
