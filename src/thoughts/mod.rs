pub mod focus;
pub mod forget;
pub mod insights;
pub mod search;
pub mod store;
pub mod types;
pub mod update;
