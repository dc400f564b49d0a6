//! Route handlers
//!
//! Webhook intake, the admin record surface, health probes, and the
//! method fallbacks shared by every bot route.

pub mod health;
pub mod methods;
pub mod records;
pub mod webhook;
