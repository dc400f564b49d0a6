//! Domain record - the persisted outcome of a completed flow (order or appeal)

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::UserIdentity;
use crate::error::DomainError;
use crate::value_objects::RecordStatus;

/// Kind of submission a bot collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Order,
    Appeal,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Appeal => "appeal",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order" => Ok(Self::Order),
            "appeal" => Ok(Self::Appeal),
            other => Err(DomainError::ValidationError(format!(
                "Unknown record kind: {other}"
            ))),
        }
    }
}

/// Fields collected by a flow, ready to be inserted.
///
/// The status of a new record is always [`RecordStatus::new_submission`];
/// the store assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub bot: String,
    pub kind: RecordKind,
    pub chat_id: i64,
    pub author: UserIdentity,
    pub service: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
}

impl NewRecord {
    /// An order for a catalog service
    pub fn order(
        bot: impl Into<String>,
        chat_id: i64,
        author: UserIdentity,
        service: impl Into<String>,
    ) -> Self {
        Self {
            bot: bot.into(),
            kind: RecordKind::Order,
            chat_id,
            author,
            service: Some(service.into()),
            full_name: None,
            phone: None,
            category: None,
            message: None,
        }
    }

    /// An appeal carrying free text
    pub fn appeal(
        bot: impl Into<String>,
        chat_id: i64,
        author: UserIdentity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            bot: bot.into(),
            kind: RecordKind::Appeal,
            chat_id,
            author,
            service: None,
            full_name: None,
            phone: None,
            category: None,
            message: Some(message.into()),
        }
    }

    /// Attach contact details supplied by the user
    pub fn with_contact(mut self, full_name: Option<String>, phone: Option<String>) -> Self {
        self.full_name = full_name;
        self.phone = phone;
        self
    }

    /// Attach a category (appeal type)
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Persisted record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    pub id: i64,
    pub bot: String,
    pub kind: RecordKind,
    pub chat_id: i64,
    pub author: UserIdentity,
    pub service: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DomainRecord {
    /// Materialize a new record with a store-assigned id
    pub fn from_new(id: i64, new: NewRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            bot: new.bot,
            kind: new.kind,
            chat_id: new.chat_id,
            author: new.author,
            service: new.service,
            full_name: new.full_name,
            phone: new.phone,
            category: new.category,
            message: new.message,
            status: RecordStatus::new_submission(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Short description used in listings: the service for orders, the
    /// category or a preview of the text for appeals
    pub fn summary(&self, max_chars: usize) -> String {
        if let Some(service) = &self.service {
            return service.clone();
        }
        if let Some(category) = &self.category {
            return category.clone();
        }
        let text = self.message.as_deref().unwrap_or_default();
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let preview: String = text.chars().take(max_chars).collect();
            format!("{preview}...")
        }
    }

    /// Apply a status set by an administrator
    pub fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
