//! # bot-api
//!
//! HTTP server built with Axum: one webhook and one admin surface per bot
//! profile, plus health probes.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::{AppState, BotHandle};
