//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bot_core::entities::{DomainRecord, RecordKind};

// ============================================================================
// Common Response Types
// ============================================================================

/// `{"ok": true}` - the webhook's answer for every handled update
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WebhookAck {
    pub ok: bool,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// `{"success": true}`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// Record Responses
// ============================================================================

/// Record as seen by the admin surface
#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub id: i64,
    pub bot: String,
    pub kind: RecordKind,
    pub telegram_user_id: i64,
    pub chat_id: i64,
    pub telegram_username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub service: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DomainRecord> for RecordResponse {
    fn from(record: DomainRecord) -> Self {
        Self {
            id: record.id,
            bot: record.bot,
            kind: record.kind,
            telegram_user_id: record.author.id,
            chat_id: record.chat_id,
            telegram_username: record.author.username,
            first_name: record.author.first_name,
            last_name: record.author.last_name,
            service: record.service,
            full_name: record.full_name,
            phone: record.phone,
            category: record.category,
            message: record.message,
            status: record.status.as_str().to_string(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// `{"orders": [...]}`, newest first
#[derive(Debug, Clone, Serialize)]
pub struct RecordListResponse {
    pub orders: Vec<RecordResponse>,
}

impl RecordListResponse {
    pub fn new(records: Vec<DomainRecord>) -> Self {
        Self {
            orders: records.into_iter().map(RecordResponse::from).collect(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// `APP_NAME` of this deployment
    pub service: String,
    /// Mounted bot profiles
    pub bots: Vec<&'static str>,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, bots: Vec<&'static str>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            bots,
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
