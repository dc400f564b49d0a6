//! Dialog engine
//!
//! One inbound update flows through four pure-ish stages:
//! classification, routing against the profile tables, action execution
//! (state transition and persistence), and a best-effort reply.

mod action;
mod classifier;
mod dispatcher;
mod engine;
pub mod form;
mod reply;

pub use action::Action;
pub use classifier::{classify, command_token, Classification};
pub use dispatcher::route;
pub use engine::{DialogEngine, DialogOutcome};
pub use reply::ReplyDispatcher;
