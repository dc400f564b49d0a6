//! Database models - SQLx-compatible structs for PostgreSQL tables

mod record;
mod state;
mod user;

pub use record::RecordModel;
pub use state::ConversationStateModel;
pub use user::BotUserModel;
