//! Test utilities for the dialog bots.
//!
//! Fast, deterministic doubles for the bot-core ports, so the dialog engine
//! and the HTTP surface can be tested without PostgreSQL or Telegram.
//!
//! - [`MemoryStore`] - users, dialog states and records behind `parking_lot` locks
//! - [`RecordingMessenger`] - captures outbound messages and callback answers

mod memory_store;
mod messenger;

pub use memory_store::MemoryStore;
pub use messenger::RecordingMessenger;
