//! In-memory implementation of every repository port

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;

use bot_core::entities::{BotUser, DialogState, DomainRecord, NewRecord, UserIdentity};
use bot_core::error::DomainError;
use bot_core::traits::{RecordRepository, RepoResult, StateStore, UserRepository};
use bot_core::value_objects::RecordStatus;

#[derive(Default)]
struct Inner {
    users: HashMap<i64, BotUser>,
    states: HashMap<(String, i64), DialogState>,
    records: Vec<DomainRecord>,
    next_id: i64,
    offline: bool,
}

/// Users, dialog states and records kept in memory.
///
/// Mirrors the PostgreSQL semantics the engine relies on: user upsert only
/// bumps `last_activity_at`, records need a known author, listings are
/// newest first, and unknown ids are reported as not found.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Make every subsequent call fail like an unreachable database
    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().offline = offline;
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.inner.lock().users.len()
    }

    /// Snapshot of every record, oldest first
    pub fn records(&self) -> Vec<DomainRecord> {
        self.inner.lock().records.clone()
    }

    /// Current state without going through the async port
    pub fn state(&self, bot: &str, user_id: i64) -> Option<DialogState> {
        self.inner
            .lock()
            .states
            .get(&(bot.to_string(), user_id))
            .copied()
    }

    fn check(inner: &Inner) -> RepoResult<()> {
        if inner.offline {
            return Err(DomainError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn upsert(&self, identity: &UserIdentity) -> RepoResult<BotUser> {
        let mut inner = self.inner.lock();
        Self::check(&inner)?;

        let user = inner
            .users
            .entry(identity.id)
            .and_modify(|user| user.touch(Utc::now()))
            .or_insert_with(|| BotUser::new(identity.clone()));
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<BotUser>> {
        let inner = self.inner.lock();
        Self::check(&inner)?;
        Ok(inner.users.get(&id).cloned())
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self, bot: &str, user_id: i64) -> RepoResult<Option<DialogState>> {
        let inner = self.inner.lock();
        Self::check(&inner)?;
        Ok(inner.states.get(&(bot.to_string(), user_id)).copied())
    }

    async fn set(&self, bot: &str, user_id: i64, state: DialogState) -> RepoResult<()> {
        let mut inner = self.inner.lock();
        Self::check(&inner)?;
        inner.states.insert((bot.to_string(), user_id), state);
        Ok(())
    }

    async fn clear(&self, bot: &str, user_id: i64) -> RepoResult<()> {
        let mut inner = self.inner.lock();
        Self::check(&inner)?;
        inner.states.remove(&(bot.to_string(), user_id));
        Ok(())
    }
}

#[async_trait]
impl RecordRepository for MemoryStore {
    async fn create(&self, record: &NewRecord) -> RepoResult<DomainRecord> {
        let mut inner = self.inner.lock();
        Self::check(&inner)?;

        if !inner.users.contains_key(&record.author.id) {
            return Err(DomainError::UserNotFound(record.author.id));
        }

        inner.next_id += 1;
        // Strictly increasing timestamps keep newest-first ordering stable
        let created_at = Utc::now() + Duration::microseconds(inner.next_id);
        let record = DomainRecord::from_new(inner.next_id, record.clone(), created_at);
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<DomainRecord>> {
        let inner = self.inner.lock();
        Self::check(&inner)?;
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, bot: Option<&str>) -> RepoResult<Vec<DomainRecord>> {
        let inner = self.inner.lock();
        Self::check(&inner)?;
        Ok(inner
            .records
            .iter()
            .rev()
            .filter(|r| bot.map_or(true, |bot| r.bot == bot))
            .cloned()
            .collect())
    }

    async fn list_for_user(
        &self,
        bot: &str,
        user_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<DomainRecord>> {
        let inner = self.inner.lock();
        Self::check(&inner)?;
        Ok(inner
            .records
            .iter()
            .rev()
            .filter(|r| r.bot == bot && r.author.id == user_id)
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: i64, status: &RecordStatus) -> RepoResult<()> {
        let mut inner = self.inner.lock();
        Self::check(&inner)?;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::RecordNotFound(id))?;
        record.set_status(status.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut inner = self.inner.lock();
        Self::check(&inner)?;
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        if inner.records.len() == before {
            return Err(DomainError::RecordNotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        Self::check(&self.inner.lock())
    }
}
