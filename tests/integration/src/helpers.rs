//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and asserting on responses.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use bot_api::{create_app, create_app_state, AppState};
use bot_common::AppConfig;
use bot_core::traits::Messenger;
use bot_service::profiles::BUILTIN;
use bot_service::{BotProfile, ServiceContext};
use bot_telegram::TelegramClient;
use bot_test_utils::{MemoryStore, RecordingMessenger};
use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Token every test bot is configured with
pub const TEST_TOKEN: &str = "123:abc";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// In-memory store, when the server is not backed by PostgreSQL
    pub store: Option<Arc<MemoryStore>>,
    /// Recording messenger shared by every bot, when not talking HTTP
    pub messenger: Option<Arc<RecordingMessenger>>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on in-memory stores with a recording messenger
    pub async fn start() -> Result<Self> {
        Self::start_with_messenger(RecordingMessenger::default()).await
    }

    /// Start a server on in-memory stores with the given recording messenger
    pub async fn start_with_messenger(messenger: RecordingMessenger) -> Result<Self> {
        let store = Arc::new(MemoryStore::default());
        let messenger = Arc::new(messenger);
        let bots = BUILTIN
            .into_iter()
            .map(|profile| (profile, messenger.clone() as Arc<dyn Messenger>))
            .collect();
        let state = memory_state(&store, bots)?;

        let mut server = Self::start_with_state(state).await?;
        server.store = Some(store);
        server.messenger = Some(messenger);
        Ok(server)
    }

    /// Start a server on in-memory stores whose bots call a (mock) Bot API
    pub async fn start_with_telegram(api_url: &str) -> Result<Self> {
        let store = Arc::new(MemoryStore::default());
        let mut bots: Vec<(&'static BotProfile, Arc<dyn Messenger>)> = Vec::new();
        for profile in BUILTIN {
            let client = TelegramClient::new(TEST_TOKEN, Duration::from_secs(5))?.with_base_url(api_url);
            bots.push((profile, Arc::new(client) as Arc<dyn Messenger>));
        }
        let state = memory_state(&store, bots)?;

        let mut server = Self::start_with_state(state).await?;
        server.store = Some(store);
        Ok(server)
    }

    /// Start the fully wired server against PostgreSQL (`DATABASE_URL`)
    pub async fn start_with_postgres(api_url: &str) -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_url = api_url.to_string();
        let config = AppConfig::from_lookup(|key| match key {
            "TELEGRAM_BOT_TOKEN" => Some(TEST_TOKEN.to_string()),
            "TELEGRAM_API_URL" => Some(api_url.clone()),
            "DATABASE_AUTO_MIGRATE" => Some("true".to_string()),
            "BOT_PROFILES" => None,
            _ => std::env::var(key).ok(),
        })
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    /// Start a test server around a prepared state
    pub async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store: None,
            messenger: None,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The in-memory store (panics for PostgreSQL-backed servers)
    pub fn store(&self) -> &MemoryStore {
        self.store.as_deref().expect("server is not backed by MemoryStore")
    }

    /// The recording messenger (panics when bots talk HTTP)
    pub fn messenger(&self) -> &RecordingMessenger {
        self.messenger
            .as_deref()
            .expect("server does not use RecordingMessenger")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(Method::GET, path).await
    }

    /// Make a request without a body
    pub async fn request(&self, method: Method, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.request(method, &url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        self.send_json(Method::POST, path, body).await
    }

    /// Make a POST request with a raw body sent as JSON
    pub async fn post_raw(&self, path: &str, body: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        self.send_json(Method::PUT, path, body).await
    }

    /// Make a DELETE request with JSON body
    pub async fn delete<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        self.send_json(Method::DELETE, path, body).await
    }

    async fn send_json<T: Serialize>(&self, method: Method, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.request(method, &url).json(body).send().await?)
    }
}

/// In-memory state with the given bots mounted
fn memory_state(
    store: &Arc<MemoryStore>,
    bots: Vec<(&'static BotProfile, Arc<dyn Messenger>)>,
) -> Result<AppState> {
    let ctx = ServiceContext::new(store.clone(), store.clone(), store.clone());
    let state = bots
        .into_iter()
        .fold(AppState::new(ctx, test_config()?), |state, (profile, messenger)| {
            state.with_bot(profile, messenger)
        });
    Ok(state)
}

/// Configuration that never touches the process environment
pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://unused@localhost/unused".to_string()),
        "TELEGRAM_BOT_TOKEN" => Some(TEST_TOKEN.to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if the PostgreSQL test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
