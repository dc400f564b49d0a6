//! # bot-telegram
//!
//! Adapter between the dialog engine and the Telegram Bot API.
//!
//! - [`types`]: raw webhook payloads and outbound request bodies
//! - [`parse_update`]: boundary validation of a raw update into [`bot_core::Update`]
//! - [`TelegramClient`]: reqwest-based [`bot_core::Messenger`] implementation

pub mod client;
pub mod types;
pub mod update;

pub use client::{TelegramClient, DEFAULT_API_URL};
pub use types::RawUpdate;
pub use update::parse_update;
