//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).
//! The whole configuration is built once at startup and passed down explicitly.

use std::collections::HashMap;
use std::env;

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub telegram: TelegramConfig,
    pub bots: BotsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    /// Schema placed on the connection's `search_path`
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply the bundled schema at startup
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

/// Telegram Bot API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Token used by every bot without its own override
    pub token: String,
    #[serde(default = "default_telegram_api_url")]
    pub api_url: String,
    #[serde(default = "default_telegram_timeout_secs")]
    pub timeout_secs: u64,
    /// Per-bot token overrides keyed by bot name
    #[serde(default)]
    pub bot_tokens: HashMap<String, String>,
}

impl TelegramConfig {
    /// Token for the given bot, falling back to the shared token
    #[must_use]
    pub fn token_for(&self, bot: &str) -> &str {
        self.bot_tokens
            .get(bot)
            .map_or(self.token.as_str(), String::as_str)
    }
}

/// Which bot profiles are mounted
#[derive(Debug, Clone, Deserialize)]
pub struct BotsConfig {
    #[serde(default = "default_bots")]
    pub enabled: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "dialog-bots".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_auto_migrate() -> bool {
    true
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_telegram_timeout_secs() -> u64 {
    10
}

fn default_bots() -> Vec<String> {
    vec!["studio".to_string(), "lksm".to_string(), "appeals".to_string()]
}

/// Environment variable holding a bot's token override, e.g. `TELEGRAM_BOT_TOKEN_STUDIO`
fn bot_token_var(bot: &str) -> String {
    format!("TELEGRAM_BOT_TOKEN_{}", bot.to_uppercase().replace('-', "_"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn is_valid_schema_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::MissingVar(key));

        let env = match var("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            None => default_env(),
        };

        let port = match var("API_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_PORT", value))?,
            None => default_port(),
        };

        let schema = match var("MAIN_DB_SCHEMA") {
            Some(value) if !is_valid_schema_name(&value) => {
                return Err(ConfigError::InvalidValue("MAIN_DB_SCHEMA", value));
            }
            other => other,
        };

        let auto_migrate = match var("DATABASE_AUTO_MIGRATE") {
            Some(value) => parse_bool(&value)
                .ok_or(ConfigError::InvalidValue("DATABASE_AUTO_MIGRATE", value))?,
            None => default_auto_migrate(),
        };

        let enabled: Vec<String> = var("BOT_PROFILES")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_lowercase)
                    .collect()
            })
            .unwrap_or_else(default_bots);

        if enabled.is_empty() {
            return Err(ConfigError::InvalidValue("BOT_PROFILES", String::new()));
        }

        let bot_tokens = enabled
            .iter()
            .filter_map(|bot| var(&bot_token_var(bot)).map(|token| (bot.clone(), token)))
            .collect();

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                schema,
                max_connections: var("DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: var("DATABASE_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
                auto_migrate,
            },
            telegram: TelegramConfig {
                token: required("TELEGRAM_BOT_TOKEN")?,
                api_url: var("TELEGRAM_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_telegram_api_url),
                timeout_secs: var("TELEGRAM_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_telegram_timeout_secs),
                bot_tokens,
            },
            bots: BotsConfig { enabled },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
}
