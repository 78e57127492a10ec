//! CLI `reset` command: delete all thoughts after user confirmation.

use anyhow::{bail, Result};
use minddump::config::MindDumpConfig;
use minddump::thoughts::forget::reset_thoughts;
use std::io::Write;

/// Delete all of the configured user's thoughts after confirmation.
pub fn reset(config: &MindDumpConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!(
        "WARNING: This will permanently delete ALL thoughts for user '{}'.",
        config.storage.default_user
    );
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let mut conn = super::open(config)?;
    let removed = reset_thoughts(&mut conn, &config.storage.default_user)?;

    println!("{removed} thought(s) deleted. The audit log keeps a record of each.");
    Ok(())
}
