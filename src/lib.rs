//! diary - a single-user diary kept in a local SQLite database.
//!
//! [`DiaryStore`] owns the persisted entries; [`split_entry`] turns the text a
//! user typed into the title/body pair the store keeps.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod split;
pub mod store;

pub use error::{DiaryError, Result};
pub use models::DiaryRecord;
pub use split::{compose_entry, split_entry};
pub use store::DiaryStore;
