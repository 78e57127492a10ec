//! MCP server initialization for stdio and streamable HTTP transports.
//!
//! Provides [`serve_stdio`] and [`serve_http`] entry points that wire up the
//! database, the classifier, and the MCP tool handler into a running server.

use crate::tools::MindDumpTools;
use anyhow::Result;
use minddump::classify::{self, Classifier};
use minddump::config::MindDumpConfig;
use minddump::db;
use rmcp::ServiceExt;
use std::sync::{Arc, Mutex};

/// Shared setup: open DB, create the classifier.
/// Returns (db, classifier, config) wrapped in Arc for sharing.
fn setup_shared_state(
    config: MindDumpConfig,
) -> Result<(
    Arc<Mutex<rusqlite::Connection>>,
    Arc<dyn Classifier>,
    Arc<MindDumpConfig>,
)> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;
    tracing::info!(db = %db_path.display(), "database ready");

    let db = Arc::new(Mutex::new(conn));

    let classifier: Arc<dyn Classifier> =
        Arc::from(classify::create_classifier(&config.classifier)?);
    if config.classifier.api_key().is_none() && classifier.name() == "gemini" {
        tracing::warn!("GEMINI_API_KEY not set; every thought will be filed as random");
    }
    tracing::info!(classifier = classifier.name(), "classifier ready");

    let config = Arc::new(config);

    Ok((db, classifier, config))
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: MindDumpConfig) -> Result<()> {
    tracing::info!("starting MindDump MCP server on stdio");

    let (db, classifier, config) = setup_shared_state(config)?;

    let tools = MindDumpTools::new(db, classifier, config);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running, waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over streamable HTTP transport.
pub async fn serve_http(config: MindDumpConfig) -> Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let bind_addr = format!("{host}:{port}");

    tracing::info!(addr = %bind_addr, "starting MindDump MCP server on HTTP");

    let (db, classifier, config) = setup_shared_state(config)?;

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || {
            Ok(MindDumpTools::new(
                db.clone(),
                classifier.clone(),
                config.clone(),
            ))
        },
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
