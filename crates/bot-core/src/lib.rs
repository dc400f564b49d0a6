//! # bot-core
//!
//! Domain layer containing entities, value objects, the inbound update model,
//! and the ports (repository and messenger traits) of the dialog engine.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod update;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{BotUser, DialogState, DomainRecord, NewRecord, RecordKind, UserIdentity};
pub use error::{DeliveryError, DomainError};
pub use traits::{Messenger, RecordRepository, RepoResult, StateStore, UserRepository};
pub use update::{CallbackQuery, IncomingMessage, InvalidUpdate, Update};
pub use value_objects::{InlineButton, InlineKeyboard, OutgoingMessage, ParseMode, RecordStatus};
