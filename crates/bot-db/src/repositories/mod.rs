//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in bot-core.
//! Each call is a single statement; conversation turns are not transactional.

mod error;
mod record;
mod state;
mod user;

pub use record::PgRecordRepository;
pub use state::PgStateStore;
pub use user::PgUserRepository;
