//! Axum extractors for request handling
//!
//! Bot resolution from the path and validated JSON bodies.

mod bot;
mod validated;

pub use bot::MountedBot;
pub use validated::ValidatedJson;
