//! Quick thought capture with automatic categorization.
//!
//! MindDump takes free-form notes, asks a Gemini model to file each one
//! under a category and a type, and keeps them in a local SQLite store.
//! The model is untrusted: whatever it returns is normalized into the closed
//! category set, and any failure degrades to `random` / `thought` instead of
//! losing the note.
//!
//! | Category | Examples |
//! |----------|----------|
//! | **work** | meetings, deadlines, projects |
//! | **shopping** | groceries, things to buy |
//! | **idea** | creative thoughts, business ideas |
//! | **personal** | family, friends, appointments |
//! | **reminder** | don't forget, remember to |
//! | **health** | exercise, medicine, doctor |
//! | **travel** | trips, flights, vacation |
//! | **random** | anything unclassifiable |
//!
//! # Modules
//!
//! - [`classify`]: prompt construction, the Gemini client, and category normalization
//! - [`config`]: configuration loading from TOML files and environment variables
//! - [`db`]: SQLite database initialization, schema, migrations, and health checks
//! - [`thoughts`]: capture, dashboard listing, edits, focus mode, and weekly insights

pub mod classify;
pub mod config;
pub mod db;
pub mod thoughts;
