//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BotsConfig, ConfigError, DatabaseConfig, Environment, ServerConfig,
    TelegramConfig,
};
