use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }

    /// Honors the bare `DATABASE_URL` and `PORT` variables used by common
    /// hosting platforms on top of the `APP_` namespace.
    pub fn apply_deployment_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(url) = lookup("DATABASE_URL").filter(|value| !value.trim().is_empty()) {
            self.database.url = url;
        }

        if let Some(port) = lookup("PORT") {
            self.general.port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid u16, got '{port}'"))?;
        }

        self.database.url = normalize_database_url(&self.database.url);
        Ok(())
    }
}

impl EnvConfig for AppConfig {
    fn apply_overrides(&mut self) -> Result<()> {
        self.apply_deployment_overrides(|key| std::env::var(key).ok())
    }

    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_idle: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_DATABASE_URL.to_string(),
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE,
        }
    }
}

/// Heroku-style `postgres://` URLs are rewritten to the `postgresql://` scheme.
pub fn normalize_database_url(url: &str) -> String {
    let trimmed = url.trim();
    match trimmed.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => trimmed.to_string(),
    }
}
