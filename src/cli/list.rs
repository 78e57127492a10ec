use anyhow::Result;
use minddump::config::MindDumpConfig;
use minddump::thoughts::search::{list_thoughts, CategoryFilter, StatusFilter, ThoughtFilter};

/// Print the dashboard listing, newest first.
pub fn list(
    config: &MindDumpConfig,
    category: Option<CategoryFilter>,
    status: Option<StatusFilter>,
    search: Option<String>,
) -> Result<()> {
    let conn = super::open(config)?;

    let filter = ThoughtFilter {
        category: category.unwrap_or_default(),
        status: status.unwrap_or_default(),
        search,
    };
    let thoughts = list_thoughts(&conn, &config.storage.default_user, &filter)?;

    if thoughts.is_empty() {
        println!("No thoughts found.");
        return Ok(());
    }

    println!("Found {} thought(s)\n", thoughts.len());
    for (i, thought) in thoughts.iter().enumerate() {
        super::print_thought(i + 1, thought);
    }

    Ok(())
}
