use anyhow::Context;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::{config::DatabaseConfig, db::providers, migration::Migrator};

/// Opens the pool for the configured URL and applies pending migrations.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;
    let redacted = providers::redact_url(&cfg.url);

    info!(provider = provider.id().as_str(), url = %redacted, "connecting to database");
    let db = provider
        .connect(cfg)
        .await
        .with_context(|| format!("failed to connect to {redacted}"))?;

    info!("applying pending migrations");
    Migrator::up(&db, None)
        .await
        .context("failed to apply migrations")?;
    Ok(db)
}
