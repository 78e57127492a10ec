//! CLI dashboard edits: `status`, `move`, `edit`, and `delete`.

use anyhow::Result;
use minddump::classify::Category;
use minddump::config::MindDumpConfig;
use minddump::thoughts::forget::delete_thought;
use minddump::thoughts::types::Status;
use minddump::thoughts::update::{edit_content, move_thought, set_status};

pub fn status(config: &MindDumpConfig, id: &str, status: Status) -> Result<()> {
    let mut conn = super::open(config)?;
    let thought = set_status(&mut conn, &config.storage.default_user, id, status)?;
    println!("{} is now {}", thought.id, thought.status);
    Ok(())
}

pub fn move_to(config: &MindDumpConfig, id: &str, category: Category) -> Result<()> {
    let mut conn = super::open(config)?;
    let thought = move_thought(&mut conn, &config.storage.default_user, id, category)?;
    println!("{} moved to {}", thought.id, thought.category);
    Ok(())
}

pub fn edit(config: &MindDumpConfig, id: &str, text: &str) -> Result<()> {
    let mut conn = super::open(config)?;
    let thought = edit_content(&mut conn, &config.storage.default_user, id, text)?;
    println!("{} updated", thought.id);
    Ok(())
}

pub fn delete(config: &MindDumpConfig, id: &str) -> Result<()> {
    let mut conn = super::open(config)?;
    let result = delete_thought(&mut conn, &config.storage.default_user, id)?;
    println!("{} deleted", result.id);
    Ok(())
}
