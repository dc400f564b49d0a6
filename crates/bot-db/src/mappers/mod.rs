//! Entity to model mappers
//!
//! This module provides conversions between domain entities (bot-core) and database models.
//! - `From<Model> for Entity`: rows that always map cleanly
//! - `TryFrom<Model> for Entity`: rows carrying enum-like text columns

mod record;
mod state;
mod user;

pub use record::RecordInsert;
pub use state::state_or_idle;
