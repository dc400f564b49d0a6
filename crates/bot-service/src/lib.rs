//! # bot-service
//!
//! Application layer: bot profiles, the dialog engine that turns one inbound
//! update into state transitions, records and replies, and the admin record
//! service.

pub mod dialog;
pub mod dto;
pub mod profiles;
pub mod services;

pub use dialog::{classify, route, Action, Classification, DialogEngine, DialogOutcome, ReplyDispatcher};
pub use profiles::{BotProfile, Menu};
pub use services::{RecordService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
