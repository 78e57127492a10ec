use anyhow::Result;
use minddump::config::MindDumpConfig;
use minddump::thoughts::search::export_thoughts;
use minddump::thoughts::types::Thought;
use serde::Serialize;

/// Export format.
#[derive(Debug, Serialize)]
struct ExportData {
    user_id: String,
    thoughts: Vec<Thought>,
}

/// Export all of the configured user's thoughts as JSON to stdout.
pub fn export(config: &MindDumpConfig) -> Result<()> {
    let conn = super::open(config)?;
    let user_id = config.storage.default_user.clone();
    let thoughts = export_thoughts(&conn, &user_id)?;

    let data = ExportData { user_id, thoughts };

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!("Exported {} thoughts.", data.thoughts.len());
    Ok(())
}
