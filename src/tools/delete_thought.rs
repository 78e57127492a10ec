use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteThoughtParams {
    #[schemars(description = "ID of the thought to delete")]
    pub id: String,

    #[schemars(description = "Must be true. Deletes are permanent.")]
    pub confirm: bool,

    #[schemars(description = "Owner of the thought. Defaults to the configured user.")]
    pub user_id: Option<String>,
}
