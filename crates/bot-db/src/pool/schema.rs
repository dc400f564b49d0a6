//! Schema bootstrap
//!
//! The bundled SQL only uses `IF NOT EXISTS` statements, so applying it on
//! every startup is safe.

use sqlx::PgPool;
use tracing::info;

const SCHEMA_SQL: &str = include_str!("../../migrations/0001_dialog_bots.sql");

/// Apply the bundled schema to the pool's database (in its `search_path`)
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
