//! Coerce free-form model output into the closed [`Category`] and
//! [`ThoughtType`] vocabularies.
//!
//! Both normalizers are total: any input, including a missing or non-string
//! value, maps to exactly one enum member. Input is cleaned first (trim,
//! lowercase, drop everything that is not an ASCII letter), then category
//! matching walks [`CATEGORY_RULES`] in order and the first rule that hits
//! wins. Nothing matched means [`Category::Random`].

use serde_json::Value;

use super::types::{Category, ThoughtType};

/// Alias → canonical category. Order matters: partial matching walks this
/// slice front to back and takes the first hit.
pub const SYNONYMS: &[(&str, Category)] = &[
    ("job", Category::Work),
    ("office", Category::Work),
    ("career", Category::Work),
    ("business", Category::Work),
    ("meeting", Category::Work),
    ("project", Category::Work),
    ("task", Category::Work),
    ("deadline", Category::Work),
    ("buy", Category::Shopping),
    ("purchase", Category::Shopping),
    ("store", Category::Shopping),
    ("grocery", Category::Shopping),
    ("groceries", Category::Shopping),
    ("market", Category::Shopping),
    ("concept", Category::Idea),
    ("thought", Category::Idea),
    ("brainstorm", Category::Idea),
    ("innovation", Category::Idea),
    ("creative", Category::Idea),
    ("self", Category::Personal),
    ("me", Category::Personal),
    ("myself", Category::Personal),
    ("life", Category::Personal),
    ("family", Category::Personal),
    ("relationship", Category::Personal),
    ("todo", Category::Reminder),
    ("remember", Category::Reminder),
    ("note", Category::Reminder),
    ("appointment", Category::Reminder),
    ("schedule", Category::Reminder),
    ("calendar", Category::Reminder),
    ("medical", Category::Health),
    ("doctor", Category::Health),
    ("fitness", Category::Health),
    ("exercise", Category::Health),
    ("wellness", Category::Health),
    ("diet", Category::Health),
    ("trip", Category::Travel),
    ("vacation", Category::Travel),
    ("journey", Category::Travel),
    ("flight", Category::Travel),
    ("hotel", Category::Travel),
    ("destination", Category::Travel),
];

/// Substrings that mark a type answer as a task.
const TASK_MARKERS: [&str; 3] = ["task", "action", "todo"];

/// A single category matching rule over an already-cleaned string.
type CategoryRule = fn(&str) -> Option<Category>;

/// Category rules in tie-break order. The name is only used for logging.
pub const CATEGORY_RULES: &[(&str, CategoryRule)] = &[
    ("exact", exact_category),
    ("synonym", synonym_category),
    ("partial_category", partial_category),
    ("partial_synonym", partial_synonym),
];

/// Trim, lowercase, and keep only ASCII letters.
pub fn clean(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Map arbitrary text to a [`Category`]. `None` and `""` mean the field was absent.
pub fn normalize_category(raw: Option<&str>) -> Category {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        tracing::debug!("category missing, defaulting to random");
        return Category::Random;
    };

    // A non-empty input that cleans to "" (e.g. "!!!") is a substring of
    // every name, so the partial rule files it under the first category.
    let cleaned = clean(raw);

    for (rule, apply) in CATEGORY_RULES {
        if let Some(category) = apply(&cleaned) {
            tracing::debug!(raw, cleaned = %cleaned, rule, category = %category, "category matched");
            return category;
        }
    }

    tracing::debug!(raw, cleaned = %cleaned, "no category rule matched, defaulting to random");
    Category::Random
}

/// Map arbitrary text to a [`ThoughtType`]. `None` means the field was absent.
pub fn normalize_type(raw: Option<&str>) -> ThoughtType {
    let Some(raw) = raw else {
        return ThoughtType::Thought;
    };

    let cleaned = clean(raw);
    if TASK_MARKERS.iter().any(|marker| cleaned.contains(marker)) {
        tracing::debug!(raw, cleaned = %cleaned, "task type found");
        ThoughtType::Task
    } else {
        ThoughtType::Thought
    }
}

/// [`normalize_category`] over a JSON field; anything but a string counts as absent.
pub fn normalize_category_value(value: Option<&Value>) -> Category {
    normalize_category(value.and_then(Value::as_str))
}

/// [`normalize_type`] over a JSON field; anything but a string counts as absent.
pub fn normalize_type_value(value: Option<&Value>) -> ThoughtType {
    normalize_type(value.and_then(Value::as_str))
}

fn exact_category(cleaned: &str) -> Option<Category> {
    cleaned.parse().ok()
}

fn synonym_category(cleaned: &str) -> Option<Category> {
    SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map(|&(_, category)| category)
}

fn partial_category(cleaned: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|category| overlaps(cleaned, category.as_str()))
}

fn partial_synonym(cleaned: &str) -> Option<Category> {
    SYNONYMS
        .iter()
        .find(|(alias, _)| overlaps(cleaned, alias))
        .map(|&(_, category)| category)
}

/// True if either string contains the other.
fn overlaps(cleaned: &str, name: &str) -> bool {
    cleaned.contains(name) || name.contains(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "!!!",
        "WORK!!",
        "  Job ",
        "grocery",
        "xyzzy",
        "shop",
        "shoping",
        "\"category\": \"travel\"",
        "Réunion",
        "日本語",
        "e",
        "workout",
        "12345",
        "personal-ish",
        "random",
    ];

    #[test]
    fn clean_strips_case_space_and_punctuation() {
        assert_eq!(clean("  WORK!! "), "work");
        assert_eq!(clean("to-do #1"), "todo");
        assert_eq!(clean("Café"), "caf");
        assert_eq!(clean("!!!"), "");
    }

    #[test]
    fn missing_values_use_defaults() {
        assert_eq!(normalize_category(None), Category::Random);
        assert_eq!(normalize_type(None), ThoughtType::Thought);
        assert_eq!(normalize_category_value(None), Category::Random);
        assert_eq!(normalize_type_value(None), ThoughtType::Thought);
    }

    #[test]
    fn non_string_values_count_as_missing() {
        let number = serde_json::json!(42);
        let list = serde_json::json!(["work"]);
        assert_eq!(normalize_category_value(Some(&number)), Category::Random);
        assert_eq!(normalize_category_value(Some(&list)), Category::Random);
        assert_eq!(normalize_type_value(Some(&serde_json::json!(true))), ThoughtType::Thought);
        assert_eq!(
            normalize_category_value(Some(&serde_json::json!("health"))),
            Category::Health
        );
    }

    #[test]
    fn exact_and_decorated_names() {
        assert_eq!(normalize_category(Some("WORK!!")), Category::Work);
        assert_eq!(normalize_category(Some("Travel.")), Category::Travel);
        assert_eq!(normalize_category(Some("\"idea\"")), Category::Idea);
    }

    #[test]
    fn synonyms_map_to_canonical_category() {
        assert_eq!(normalize_category(Some("  Job ")), Category::Work);
        assert_eq!(normalize_category(Some("grocery")), Category::Shopping);
        assert_eq!(normalize_category(Some("Vacation")), Category::Travel);
        assert_eq!(normalize_category(Some("doctor")), Category::Health);
        assert_eq!(normalize_category(Some("todo")), Category::Reminder);
    }

    #[test]
    fn partial_category_match_walks_category_order() {
        assert_eq!(normalize_category(Some("shop")), Category::Shopping);
        assert_eq!(normalize_category(Some("workout")), Category::Work);
        assert_eq!(normalize_category(Some("ideas")), Category::Idea);
        // "e" sits inside several names; the first in category order wins.
        assert_eq!(normalize_category(Some("e")), Category::Idea);
    }

    #[test]
    fn partial_synonym_match_walks_table_order() {
        assert_eq!(normalize_category(Some("jobs")), Category::Work);
        assert_eq!(normalize_category(Some("flights")), Category::Travel);
        // "appointments" contains "me" before it reaches "appointment".
        assert_eq!(normalize_category(Some("appointments")), Category::Personal);
    }

    #[test]
    fn unmatched_falls_back_to_random() {
        assert_eq!(normalize_category(Some("xyzzy")), Category::Random);
        assert_eq!(normalize_category(Some("shoping")), Category::Random);
        assert_eq!(normalize_category(Some("")), Category::Random);
    }

    #[test]
    fn input_that_cleans_to_nothing_takes_first_category() {
        assert_eq!(normalize_category(Some("!!!")), Category::Work);
        assert_eq!(normalize_category(Some("   ")), Category::Work);
        assert_eq!(normalize_category(Some("12345")), Category::Work);
        assert_eq!(normalize_category(Some("日本語")), Category::Work);
    }

    #[test]
    fn type_markers() {
        assert_eq!(normalize_type(Some("This is a TASK")), ThoughtType::Task);
        assert_eq!(normalize_type(Some("todo: call mom")), ThoughtType::Task);
        assert_eq!(normalize_type(Some("actionable")), ThoughtType::Task);
        assert_eq!(normalize_type(Some("to-do")), ThoughtType::Task);
        assert_eq!(normalize_type(Some("I feel happy")), ThoughtType::Thought);
        assert_eq!(normalize_type(Some("")), ThoughtType::Thought);
    }

    #[test]
    fn normalizers_are_total() {
        for sample in SAMPLES {
            let category = normalize_category(Some(*sample));
            assert!(Category::ALL.contains(&category), "{sample:?} -> {category:?}");
            let thought_type = normalize_type(Some(*sample));
            assert!(matches!(thought_type, ThoughtType::Task | ThoughtType::Thought));
        }
    }

    #[test]
    fn category_normalization_is_idempotent() {
        for category in Category::ALL {
            assert_eq!(normalize_category(Some(category.as_str())), category);
        }
        for sample in SAMPLES {
            let once = normalize_category(Some(*sample));
            assert_eq!(normalize_category(Some(once.as_str())), once);
        }
    }

    #[test]
    fn synonym_table_targets_real_categories() {
        for (alias, category) in SYNONYMS {
            assert_eq!(clean(alias), *alias, "alias {alias} must already be clean");
            assert_ne!(*category, Category::Random);
        }
    }
}
