//! Connection pools and schema setup for the SmartFit database.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use tracing::info;

use crate::config::DbConfig;

/// Migrations embedded at compile time from `crates/smartfit-db/migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Connect to the configured SmartFit database.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await
        .with_context(|| format!("failed to connect to database at {}", config.database_url))
}

/// Single-connection pool on a maintenance database, for `CREATE DATABASE`.
pub async fn connect_maintenance(url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(url)
        .await
        .with_context(|| format!("failed to connect to maintenance database at {url}"))
}

/// Apply pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("failed to run database migrations")?;
    info!("migrations applied");
    Ok(())
}

/// Create database `name` through `maint` unless it already exists.
///
/// Returns `true` when the database was created.
pub async fn create_database_if_missing(maint: &PgPool, name: &str) -> Result<bool> {
    check_database_name(name)?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(name)
            .fetch_one(maint)
            .await
            .context("failed to query pg_database")?;
    if exists {
        return Ok(false);
    }

    maint
        .execute(format!("CREATE DATABASE {name}").as_str())
        .await
        .with_context(|| format!("failed to create database {name}"))?;
    Ok(true)
}

/// Bring the configured database to the current schema, creating it first
/// if the server does not have it. Backs `smartfit db-init`.
pub async fn prepare_database(config: &DbConfig) -> Result<PgPool> {
    let name = config
        .database_name()
        .context("could not determine database name from URL")?;

    let maint = connect_maintenance(&config.maintenance_url()).await?;
    let created = create_database_if_missing(&maint, name).await;
    maint.close().await;
    if created? {
        info!(db = name, "database created");
    } else {
        info!(db = name, "database already exists");
    }

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

// CREATE DATABASE takes no bind parameters, so the name is spliced in.
fn check_database_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    if !valid {
        bail!("database name {name:?} must be letters, digits and underscores");
    }
    Ok(())
}

/// Row counts for the three SmartFit tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub fitness_profiles: i64,
    pub workout_programs: i64,
    pub workout_splits: i64,
}

impl TableCounts {
    /// `(table, rows)` pairs in schema order.
    pub fn rows(&self) -> [(&'static str, i64); 3] {
        [
            ("fitness_profiles", self.fitness_profiles),
            ("workout_programs", self.workout_programs),
            ("workout_splits", self.workout_splits),
        ]
    }
}

/// Count the rows in each SmartFit table.
pub async fn table_counts(pool: &PgPool) -> Result<TableCounts> {
    let (fitness_profiles, workout_programs, workout_splits): (i64, i64, i64) =
        sqlx::query_as(
            "SELECT \
                 (SELECT COUNT(*) FROM fitness_profiles), \
                 (SELECT COUNT(*) FROM workout_programs), \
                 (SELECT COUNT(*) FROM workout_splits)",
        )
        .fetch_one(pool)
        .await
        .context("failed to count rows")?;

    Ok(TableCounts {
        fitness_profiles,
        workout_programs,
        workout_splits,
    })
}
