//! MCP `list_thoughts` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `list_thoughts` MCP tool. Every filter is optional.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListThoughtsParams {
    /// `"all"`, `"thoughts"`, or a category name.
    #[schemars(
        description = "Category filter: 'all', 'thoughts' (reflections of any category), or one of 'work', 'shopping', 'idea', 'personal', 'reminder', 'health', 'travel', 'random'"
    )]
    pub category: Option<String>,

    /// `"all"`, `"urgent"`, or a status name.
    #[schemars(
        description = "Status filter: 'all', 'urgent' (mentions urgent/asap/today/...), or one of 'pending', 'done', 'archived', 'thought'"
    )]
    pub status: Option<String>,

    #[schemars(description = "Case-insensitive substring to look for in the content")]
    pub search: Option<String>,

    #[schemars(description = "Owner of the thoughts. Defaults to the configured user.")]
    pub user_id: Option<String>,
}
