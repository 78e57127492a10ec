mod cli;
mod server;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use minddump::classify::Category;
use minddump::config::MindDumpConfig;
use minddump::thoughts::search::{CategoryFilter, StatusFilter};
use minddump::thoughts::types::Status;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minddump", version, about = "Capture thoughts and let Gemini file them")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server (stdio transport unless --http)
    Serve {
        /// Serve over streamable HTTP at the configured host and port
        #[arg(long)]
        http: bool,
    },
    /// Classify and store a thought
    Capture {
        /// The thought, as you would type it
        text: String,
    },
    /// Classify a thought without storing it
    Classify { text: String },
    /// List thoughts, newest first
    List {
        /// all, thoughts, or a category name
        #[arg(long)]
        category: Option<CategoryFilter>,
        /// all, urgent, or a status name
        #[arg(long)]
        status: Option<StatusFilter>,
        /// Case-insensitive substring of the content
        #[arg(long)]
        search: Option<String>,
    },
    /// Change a thought's status
    Status { id: String, status: Status },
    /// Move a thought to another category
    Move { id: String, category: Category },
    /// Replace a thought's content
    Edit { id: String, text: String },
    /// Delete a thought
    Delete { id: String },
    /// Show the focus queue of open tasks
    Focus {
        /// Mark this task done before showing the queue
        #[arg(long)]
        done: Option<String>,
    },
    /// Show this week's insights
    Insights,
    /// Export all thoughts as JSON to stdout
    Export,
    /// Delete all thoughts (requires confirmation)
    Reset,
    /// Run database diagnostics
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = MindDumpConfig::load()?;

    // Log to stderr so stdout stays clean for MCP JSON-RPC and exports.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { http } => {
            if http || config.server.transport == "http" {
                server::serve_http(config).await?;
            } else {
                server::serve_stdio(config).await?;
            }
        }
        Command::Capture { text } => cli::capture::capture(&config, &text).await?,
        Command::Classify { text } => cli::capture::classify(&config, &text).await?,
        Command::List {
            category,
            status,
            search,
        } => cli::list::list(&config, category, status, search)?,
        Command::Status { id, status } => cli::update::status(&config, &id, status)?,
        Command::Move { id, category } => cli::update::move_to(&config, &id, category)?,
        Command::Edit { id, text } => cli::update::edit(&config, &id, &text)?,
        Command::Delete { id } => cli::update::delete(&config, &id)?,
        Command::Focus { done } => cli::focus::focus(&config, done.as_deref())?,
        Command::Insights => cli::insights::insights(&config)?,
        Command::Export => cli::export::export(&config)?,
        Command::Reset => cli::reset::reset(&config)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
    }

    Ok(())
}
