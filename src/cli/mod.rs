pub mod capture;
pub mod doctor;
pub mod export;
pub mod focus;
pub mod insights;
pub mod list;
pub mod reset;
pub mod update;

use anyhow::Result;
use minddump::classify::Category;
use minddump::config::MindDumpConfig;
use minddump::thoughts::search::has_urgency;
use minddump::thoughts::types::Thought;
use rusqlite::Connection;

/// Open the configured database.
fn open(config: &MindDumpConfig) -> Result<Connection> {
    minddump::db::open_database(config.resolved_db_path())
}

/// Truncate to `max` characters, on a char boundary.
fn preview(content: &str, max: usize) -> String {
    match content.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &content[..idx]),
        None => content.to_string(),
    }
}

/// Print one thought as a two-line list entry.
fn print_thought(index: usize, thought: &Thought) {
    let known = thought.category.parse::<Category>().is_ok();
    println!(
        "  {}. [{}{}] {} ({}){}",
        index,
        thought.category,
        if known { "" } else { "?" },
        thought.id,
        thought.status,
        if has_urgency(&thought.content) { " !" } else { "" },
    );
    println!("     {}", preview(&thought.content, 120));
    println!("     captured {}", thought.created_at);
    println!();
}
