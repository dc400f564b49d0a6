//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every operation is a single statement;
//! there is no transaction spanning a conversation turn.

use async_trait::async_trait;

use crate::entities::{BotUser, DialogState, DomainRecord, NewRecord, UserIdentity};
use crate::error::DomainError;
use crate::value_objects::RecordStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user on first contact, otherwise bump `last_activity_at`
    async fn upsert(&self, identity: &UserIdentity) -> RepoResult<BotUser>;

    /// Find user by platform id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<BotUser>>;
}

// ============================================================================
// State Store
// ============================================================================

/// Per-user dialog checkpoint, scoped by bot. Last writer wins.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Current state, `None` when the user is idle
    async fn get(&self, bot: &str, user_id: i64) -> RepoResult<Option<DialogState>>;

    /// Set (upsert) the current state
    async fn set(&self, bot: &str, user_id: i64, state: DialogState) -> RepoResult<()>;

    /// Forget the current state; clearing an idle user is not an error
    async fn clear(&self, bot: &str, user_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Record Repository
// ============================================================================

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Insert a record; the returned id has never been used before
    async fn create(&self, record: &NewRecord) -> RepoResult<DomainRecord>;

    /// Find record by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<DomainRecord>>;

    /// All records, newest first, optionally restricted to one bot
    async fn list(&self, bot: Option<&str>) -> RepoResult<Vec<DomainRecord>>;

    /// A user's most recent records in one bot, newest first
    async fn list_for_user(&self, bot: &str, user_id: i64, limit: i64)
        -> RepoResult<Vec<DomainRecord>>;

    /// Set the status; fails with `RecordNotFound` when the id is unknown
    async fn update_status(&self, id: i64, status: &RecordStatus) -> RepoResult<()>;

    /// Remove a record; fails with `RecordNotFound` when the id is unknown
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
