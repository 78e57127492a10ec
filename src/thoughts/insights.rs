//! Weekly insights: what was captured and completed this week.
//!
//! The week runs Monday 00:00:00.000 to Sunday 23:59:59.999 UTC and is
//! matched against `created_at`, so "tasks completed" counts tasks created
//! this week that are now done.

use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, Utc};
use rusqlite::{params, Connection};
use serde::Serialize;

use super::types::format_timestamp;

/// Number of thoughts in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Response from [`weekly_insights`].
#[derive(Debug, Serialize)]
pub struct WeeklyInsights {
    pub week_start: String,
    pub week_end: String,
    pub thoughts_added: u64,
    pub tasks_completed: u64,
    /// Most frequent first; ties broken by category name.
    pub categories: Vec<CategoryCount>,
    pub message: &'static str,
}

/// Monday 00:00 through Sunday 23:59:59.999 of the week containing `now`.
pub fn week_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let days_from_monday = i64::from(now.weekday().num_days_from_monday());
    let monday = now.date_naive() - Duration::days(days_from_monday);
    let start = monday.and_time(chrono::NaiveTime::MIN).and_utc();
    let end = start + Duration::days(7) - Duration::milliseconds(1);
    (start, end)
}

/// Encouragement tier for the week's numbers.
pub fn motivational_message(thoughts_added: u64, tasks_completed: u64) -> &'static str {
    match (thoughts_added, tasks_completed) {
        (_, done) if done >= 10 => "Incredible! You're absolutely crushing it this week!",
        (_, done) if done >= 5 => "Great job! You're making excellent progress this week!",
        (_, done) if done >= 1 => "Nice work! Every completed task is a step forward!",
        (added, _) if added >= 5 => {
            "You're capturing lots of thoughts! Now let's turn them into action!"
        }
        _ => "Keep going! Small steps make big progress. You've got this!",
    }
}

/// Compute this week's insights for a user.
pub fn weekly_insights(conn: &Connection, user_id: &str, now: DateTime<Utc>) -> Result<WeeklyInsights> {
    let (start, end) = week_bounds(now);
    let (week_start, week_end) = (format_timestamp(start), format_timestamp(end));

    let (thoughts_added, tasks_completed): (i64, i64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(status = 'done'), 0) FROM thoughts \
         WHERE user_id = ?1 AND created_at >= ?2 AND created_at <= ?3",
        params![user_id, week_start, week_end],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) FROM thoughts \
         WHERE user_id = ?1 AND created_at >= ?2 AND created_at <= ?3 \
         GROUP BY category ORDER BY COUNT(*) DESC, category ASC",
    )?;
    let categories = stmt
        .query_map(params![user_id, week_start, week_end], |row| {
            Ok(CategoryCount {
                category: row.get(0)?,
                count: row.get::<_, i64>(1)? as u64,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let thoughts_added = thoughts_added as u64;
    let tasks_completed = tasks_completed as u64;

    Ok(WeeklyInsights {
        week_start,
        week_end,
        thoughts_added,
        tasks_completed,
        categories,
        message: motivational_message(thoughts_added, tasks_completed),
    })
}
