//! CLI `doctor` command: database diagnostics and classifier setup.

use anyhow::{Context, Result};
use minddump::config::MindDumpConfig;
use minddump::db;

/// Run database diagnostics and print a health report.
pub fn doctor(config: &MindDumpConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("MindDump Health Report");
    println!("======================");
    println!();
    println!("Classifier:");
    println!("  Provider:        {}", config.classifier.provider);
    println!("  Model:           {}", config.classifier.model);
    println!(
        "  API key:         {}",
        if config.classifier.api_key().is_some() {
            "set"
        } else {
            "MISSING (thoughts will be filed as random)"
        }
    );
    println!();

    if !db_path.exists() {
        println!("Database: not found at {}", db_path.display());
        println!("Run `minddump capture <text>` to initialize.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    let conn = db::open_database(&db_path).context("failed to open database (may be corrupt)")?;
    let report = db::check_database_health(&conn).context("failed to run health check")?;

    println!("Database:          {}", db_path.display());
    println!("File size:         {}", format_bytes(file_size));
    println!("Schema version:    {}", report.schema_version);
    println!();
    println!("Row counts:");
    println!("  Thoughts:        {}", report.thought_count);
    println!("  Audit log:       {}", report.log_count);
    println!();
    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
        println!();
        println!("Recovery steps:");
        println!("  1. Restore from a backup: cp backup.db ~/.minddump/thoughts.db");
        println!("  2. Or save what is readable: minddump export > backup.json");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
