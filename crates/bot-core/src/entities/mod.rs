//! Domain entities - core business objects

mod record;
mod state;
mod user;

pub use record::{DomainRecord, NewRecord, RecordKind};
pub use state::DialogState;
pub use user::{BotUser, UserIdentity};
