use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection};

use super::registry::{DbProvider, DbProviderId, pool_options};
use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct SqliteDbProvider;

#[async_trait]
impl DbProvider for SqliteDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Sqlite
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("sqlite:")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut options = pool_options(cfg);
        if is_memory_url(&cfg.url) {
            // every pooled connection would otherwise see its own empty database
            options.max_connections(1).min_connections(1);
        }
        // applied per connection, so every pooled handle enforces the favorites FKs
        options.map_sqlx_sqlite_opts(|opts| {
            opts.foreign_keys(true).busy_timeout(SQLITE_BUSY_TIMEOUT)
        });

        Ok(Database::connect(options).await?)
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
