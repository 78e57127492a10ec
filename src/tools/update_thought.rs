//! MCP `update_thought` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `update_thought` MCP tool.
///
/// At least one of `content`, `category`, or `status` must be given. They are
/// applied in that order, so a move and a status change can go together.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateThoughtParams {
    #[schemars(description = "ID of the thought to update")]
    pub id: String,

    #[schemars(description = "Replacement text. Category and status are not re-derived.")]
    pub content: Option<String>,

    #[schemars(
        description = "New category: 'work', 'shopping', 'idea', 'personal', 'reminder', 'health', or 'travel'. Moving to 'random' is not allowed."
    )]
    pub category: Option<String>,

    #[schemars(
        description = "New status: 'pending', 'done', or 'archived'. Reflections and random thoughts can only be archived."
    )]
    pub status: Option<String>,

    #[schemars(description = "Owner of the thought. Defaults to the configured user.")]
    pub user_id: Option<String>,
}
