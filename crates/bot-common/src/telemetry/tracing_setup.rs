//! Tracing and logging setup
//!
//! The bot crates log at the configured level while third-party crates stay
//! at `warn`, except `tower_http` whose request spans follow the bot level.
//! `RUST_LOG` replaces the whole filter when set.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

const BOT_TARGETS: [&str; 6] = [
    "bot_api",
    "bot_service",
    "bot_telegram",
    "bot_db",
    "bot_common",
    "tower_http",
];

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for the bot crates
    pub level: Level,
    /// Emit one JSON object per event
    pub json: bool,
    /// Log span open/close (request lifecycles)
    pub span_events: bool,
    /// Include file and line numbers
    pub file_line: bool,
}

impl TracingConfig {
    /// Preset for a deployment environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Production => Self {
                level: Level::INFO,
                json: true,
                span_events: false,
                file_line: false,
            },
            Environment::Staging => Self {
                level: Level::INFO,
                json: true,
                span_events: false,
                file_line: true,
            },
            Environment::Development => Self {
                level: Level::DEBUG,
                json: false,
                span_events: true,
                file_line: true,
            },
        }
    }

    /// Default filter directives, e.g. `warn,bot_api=info,...`
    pub fn directives(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        BOT_TARGETS
            .iter()
            .fold(String::from("warn"), |mut acc, target| {
                acc.push(',');
                acc.push_str(target);
                acc.push('=');
                acc.push_str(&level);
                acc
            })
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Install the global subscriber; fails if one is already installed
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directives()));

    fn base_layer<S>(config: &TracingConfig) -> fmt::Layer<S>
    where
        S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        fmt::layer()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(config.span_events())
    }

    // Exactly one of the two layers is present
    let (json_layer, text_layer) = if config.json {
        (Some(base_layer(&config).json()), None)
    } else {
        (None, Some(base_layer(&config)))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
