use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FocusQueueParams {
    #[schemars(description = "Optional ID of a task to mark done before returning the queue")]
    pub done: Option<String>,

    #[schemars(description = "Owner of the tasks. Defaults to the configured user.")]
    pub user_id: Option<String>,
}
