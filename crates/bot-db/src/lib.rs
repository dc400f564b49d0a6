//! # bot-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `bot-core`. It handles:
//!
//! - Connection pool management (with optional `search_path` schema)
//! - Schema bootstrap from the bundled SQL
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! Every repository call is a single parameterized statement on a pooled
//! connection that is released as soon as the statement completes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bot_db::{create_pool, DatabaseConfig, PgRecordRepository};
//! use bot_core::traits::RecordRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let records = PgRecordRepository::new(pool);
//!
//!     let newest_first = records.list(Some("studio")).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgRecordRepository, PgStateStore, PgUserRepository};
