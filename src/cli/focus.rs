//! CLI `focus` command: one open task at a time, oldest first.

use anyhow::Result;
use minddump::config::MindDumpConfig;
use minddump::thoughts::focus::{complete_focus_item, focus_queue};

/// Show the focus queue, optionally completing a task first.
pub fn focus(config: &MindDumpConfig, done: Option<&str>) -> Result<()> {
    let mut conn = super::open(config)?;
    let user = &config.storage.default_user;

    let queue = match done {
        Some(id) => {
            let remaining = complete_focus_item(&mut conn, user, id)?;
            println!("Completed {id}. {} task(s) left.\n", remaining.len());
            remaining
        }
        None => focus_queue(&conn, user)?,
    };

    let Some(current) = queue.first() else {
        println!("Nothing to focus on. All tasks are done!");
        return Ok(());
    };

    println!("Focus Mode");
    println!("{}", "=".repeat(40));
    println!("  Task 1 of {}  [{}]", queue.len(), current.category);
    println!("  {}", current.content);
    println!();
    println!(
        "  Work {} min, then break {} min.",
        config.focus.work_minutes, config.focus.break_minutes
    );
    println!("  Done? minddump focus --done {}", current.id);

    if queue.len() > 1 {
        println!();
        println!("Up next:");
        for thought in queue.iter().skip(1).take(5) {
            println!("  - [{}] {}", thought.category, super::preview(&thought.content, 80));
        }
    }

    Ok(())
}
