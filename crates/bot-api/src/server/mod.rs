//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use bot_common::{AppConfig, AppError};
use bot_db::{create_pool, run_migrations, PgRecordRepository, PgStateStore, PgUserRepository};
use bot_service::{profiles, ServiceContextBuilder};
use bot_telegram::TelegramClient;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = bot_db::DatabaseConfig {
        url: config.database.url.clone(),
        schema: config.database.schema.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(schema = ?db_config.schema, "PostgreSQL connection established");

    if config.database.auto_migrate {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .state_store(Arc::new(PgStateStore::new(pool.clone())))
        .record_repo(Arc::new(PgRecordRepository::new(pool)))
        .build()
        .map_err(AppError::internal)?;

    // One Telegram client per bot, each with its own token
    let mut mounted = Vec::with_capacity(config.bots.enabled.len());
    for name in &config.bots.enabled {
        let profile = profiles::builtin(name)
            .ok_or_else(|| AppError::UnknownProfile(name.clone()))?;
        let client = TelegramClient::new(
            config.telegram.token_for(name),
            Duration::from_secs(config.telegram.timeout_secs),
        )?
        .with_base_url(config.telegram.api_url.as_str());
        mounted.push((profile, client));
    }

    let state = mounted
        .into_iter()
        .fold(AppState::new(service_context, config), |state, (profile, client)| {
            state.with_bot(profile, Arc::new(client))
        });
    info!(bots = ?state.bot_names(), "Bots mounted");

    Ok(state)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::Serve)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e: std::net::AddrParseError| AppError::InvalidAddress(e.to_string()))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
