//! User entity - the chat-platform identity behind every update

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity fields copied from an inbound update's `from` object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserIdentity {
    /// Create an identity with only the numeric id set
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            first_name: None,
            last_name: None,
        }
    }

    /// Set the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set first and last name
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: Option<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = last_name;
        self
    }

    /// Human readable name: "First Last", falling back to @username, then the id
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !full.is_empty() {
            return full;
        }

        match &self.username {
            Some(username) if !username.is_empty() => format!("@{username}"),
            _ => self.id.to_string(),
        }
    }
}

/// Persisted user row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotUser {
    pub identity: UserIdentity,
    pub first_seen_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl BotUser {
    /// Create a user first seen right now
    pub fn new(identity: UserIdentity) -> Self {
        let now = Utc::now();
        Self {
            identity,
            first_seen_at: now,
            last_activity_at: now,
        }
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.identity.id
    }

    /// Record activity at the given instant
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.last_activity_at = at;
    }
}
