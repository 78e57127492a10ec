use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WeeklyInsightsParams {
    #[schemars(description = "Owner of the thoughts. Defaults to the configured user.")]
    pub user_id: Option<String>,
}
