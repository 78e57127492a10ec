pub mod capture_thought;
pub mod delete_thought;
pub mod focus_queue;
pub mod list_thoughts;
pub mod update_thought;
pub mod weekly_insights;

use capture_thought::CaptureThoughtParams;
use delete_thought::DeleteThoughtParams;
use focus_queue::FocusQueueParams;
use list_thoughts::ListThoughtsParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use rusqlite::Connection;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use update_thought::UpdateThoughtParams;
use weekly_insights::WeeklyInsightsParams;

use minddump::classify::{Category, Classifier};
use minddump::config::MindDumpConfig;
use minddump::thoughts::search::{CategoryFilter, StatusFilter, ThoughtFilter};
use minddump::thoughts::types::Status;
use minddump::thoughts::update::ThoughtUpdate;
use minddump::thoughts::{focus, forget, insights, search, store, update};

/// The MindDump MCP tool handler. Holds shared state (db connection,
/// classifier, config) and exposes all MCP tools via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct MindDumpTools {
    tool_router: ToolRouter<Self>,
    db: Arc<Mutex<Connection>>,
    classifier: Arc<dyn Classifier>,
    config: Arc<MindDumpConfig>,
}

impl MindDumpTools {
    fn user_id(&self, requested: Option<String>) -> String {
        requested.unwrap_or_else(|| self.config.storage.default_user.clone())
    }

    /// Run a sync DB operation on the blocking pool.
    async fn with_db<T, F>(&self, op: F) -> Result<T, String>
    where
        F: FnOnce(&mut Connection) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let mut conn = db
                .lock()
                .map_err(|e| anyhow::anyhow!("db lock poisoned: {e}"))?;
            op(&mut conn)
        })
        .await
        .map_err(|e| format!("db task failed: {e}"))?
        .map_err(|e| e.to_string())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("serialization failed: {e}"))
}

#[tool_router]
impl MindDumpTools {
    pub fn new(
        db: Arc<Mutex<Connection>>,
        classifier: Arc<dyn Classifier>,
        config: Arc<MindDumpConfig>,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            db,
            classifier,
            config,
        }
    }

    /// Capture a thought: classify it and store it.
    #[tool(description = "Capture a thought. It is filed automatically under one of: work, shopping, idea, personal, reminder, health, travel, random; and typed as a task (actionable) or a thought (reflection).")]
    async fn capture_thought(
        &self,
        Parameters(params): Parameters<CaptureThoughtParams>,
    ) -> Result<String, String> {
        let content = store::validate_content(&params.content)
            .map_err(|e| e.to_string())?
            .to_string();
        let user_id = self.user_id(params.user_id);

        tracing::info!(content_len = content.len(), user = %user_id, "capture_thought called");

        // 1. Classify without holding the DB lock
        let classification = self.classifier.classify(&content).await;

        // 2. Run write path (sync DB ops → spawn_blocking)
        let result = self
            .with_db(move |conn| store::store_thought(conn, &user_id, &content, &classification))
            .await
            .map_err(|e| format!("store failed: {e}"))?;

        tracing::info!(
            id = %result.id,
            category = %result.category,
            provenance = result.provenance.as_str(),
            "thought captured"
        );

        to_json(&result)
    }

    /// List thoughts for the dashboard.
    #[tool(description = "List thoughts, newest first. Filter by category ('all', 'thoughts', or a category), status ('all', 'urgent', or a status), and a case-insensitive search string.")]
    async fn list_thoughts(
        &self,
        Parameters(params): Parameters<ListThoughtsParams>,
    ) -> Result<String, String> {
        let filter = ThoughtFilter {
            category: params
                .category
                .as_deref()
                .map(str::parse::<CategoryFilter>)
                .transpose()?
                .unwrap_or_default(),
            status: params
                .status
                .as_deref()
                .map(str::parse::<StatusFilter>)
                .transpose()?
                .unwrap_or_default(),
            search: params.search,
        };
        let user_id = self.user_id(params.user_id);

        tracing::debug!(?filter, user = %user_id, "list_thoughts called");

        let thoughts = self
            .with_db(move |conn| search::list_thoughts(conn, &user_id, &filter))
            .await?;

        to_json(&serde_json::json!({
            "thoughts": thoughts,
            "total": thoughts.len(),
        }))
    }

    /// Edit, move, or change the status of a thought.
    #[tool(description = "Update a thought: replace its content, move it to another category, and/or change its status. Returns the updated thought.")]
    async fn update_thought(
        &self,
        Parameters(params): Parameters<UpdateThoughtParams>,
    ) -> Result<String, String> {
        let category = params
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?;
        let status = params
            .status
            .as_deref()
            .map(str::parse::<Status>)
            .transpose()?;
        let update = ThoughtUpdate {
            content: params.content,
            category,
            status,
        };
        if update.is_empty() {
            return Err("nothing to update: give content, category, or status".into());
        }

        let id = params.id;
        let user_id = self.user_id(params.user_id);
        tracing::info!(id = %id, "update_thought called");

        let thought = self
            .with_db(move |conn| update::update_thought(conn, &user_id, &id, &update))
            .await?;

        to_json(&thought)
    }

    /// Delete a thought permanently.
    #[tool(description = "Delete a thought by ID. Requires confirm=true as a safety gate.")]
    async fn delete_thought(
        &self,
        Parameters(params): Parameters<DeleteThoughtParams>,
    ) -> Result<String, String> {
        if !params.confirm {
            return Err("confirm must be true to delete".into());
        }
        let id = params.id;
        let user_id = self.user_id(params.user_id);
        tracing::info!(id = %id, "delete_thought called");

        let result = self
            .with_db(move |conn| forget::delete_thought(conn, &user_id, &id))
            .await?;

        to_json(&result)
    }

    /// Focus mode queue.
    #[tool(description = "Get the focus queue: pending tasks outside 'random', oldest first. Pass done=<id> to complete the current task first.")]
    async fn focus_queue(
        &self,
        Parameters(params): Parameters<FocusQueueParams>,
    ) -> Result<String, String> {
        let user_id = self.user_id(params.user_id);
        let done = params.done;

        let queue = self
            .with_db(move |conn| match done {
                Some(id) => focus::complete_focus_item(conn, &user_id, &id),
                None => focus::focus_queue(conn, &user_id),
            })
            .await?;

        to_json(&serde_json::json!({
            "current": queue.first(),
            "remaining": queue.len(),
            "queue": queue,
            "work_minutes": self.config.focus.work_minutes,
            "break_minutes": self.config.focus.break_minutes,
        }))
    }

    /// Weekly insights.
    #[tool(description = "Get this week's insights (Monday to Sunday, UTC): thoughts added, tasks completed, category breakdown, and an encouraging message.")]
    async fn weekly_insights(
        &self,
        Parameters(params): Parameters<WeeklyInsightsParams>,
    ) -> Result<String, String> {
        let user_id = self.user_id(params.user_id);

        let report = self
            .with_db(move |conn| insights::weekly_insights(conn, &user_id, chrono::Utc::now()))
            .await?;

        to_json(&report)
    }
}

#[tool_handler]
impl ServerHandler for MindDumpTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "MindDump captures thoughts and files them automatically. Use capture_thought \
                 to save a note, list_thoughts to browse, and focus_queue to work through tasks."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
