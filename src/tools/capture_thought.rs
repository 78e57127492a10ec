use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CaptureThoughtParams {
    #[schemars(description = "The thought as the user typed it, e.g. 'buy milk and eggs'")]
    pub content: String,

    #[schemars(description = "Owner of the thought. Defaults to the configured user.")]
    pub user_id: Option<String>,
}
