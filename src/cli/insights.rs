use anyhow::Result;
use minddump::config::MindDumpConfig;
use minddump::thoughts::insights::weekly_insights;

/// Display this week's insights in the terminal.
pub fn insights(config: &MindDumpConfig) -> Result<()> {
    let conn = super::open(config)?;
    let report = weekly_insights(&conn, &config.storage.default_user, chrono::Utc::now())?;

    println!("Weekly Insights");
    println!("{}", "=".repeat(40));
    println!("  Week:                {} .. {}", &report.week_start[..10], &report.week_end[..10]);
    println!("  Thoughts added:      {}", report.thoughts_added);
    println!("  Tasks completed:     {}", report.tasks_completed);
    println!();

    if !report.categories.is_empty() {
        println!("By Category:");
        for entry in &report.categories {
            println!("  {:<12} {}", entry.category, entry.count);
        }
        println!();
    }

    println!("{}", report.message);
    Ok(())
}
