//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Rating submission policy.
    #[serde(default)]
    pub ratings: RatingsConfig,
    /// Client log ingestion configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Policy applied when the same client identity rates a movie twice.
///
/// The intended invariant is one rating per (movie, client identity) pair,
/// but the store does not enforce it; the submission handler does, according
/// to this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateRatingPolicy {
    /// Keep inserting additional rows (legacy behavior).
    Allow,
    /// Reject the resubmission with a conflict error.
    Reject,
    /// Overwrite the star value of the existing row.
    Replace,
}

/// Rating submission configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingsConfig {
    /// Whether unauthenticated callers may submit ratings.
    #[serde(default = "default_true")]
    pub allow_anonymous: bool,
    /// What to do when a client identity rates the same movie again.
    #[serde(default = "default_duplicate_policy")]
    pub on_duplicate: DuplicateRatingPolicy,
}

impl Default for RatingsConfig {
    fn default() -> Self {
        Self {
            allow_anonymous: true,
            on_duplicate: DuplicateRatingPolicy::Replace,
        }
    }
}

/// Client log ingestion configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Path of the append-only file for client-submitted log entries.
    #[serde(default = "default_client_log_path")]
    pub client_log_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            client_log_path: default_client_log_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_connections() -> u32 {
    100
}

const fn default_min_connections() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

const fn default_duplicate_policy() -> DuplicateRatingPolicy {
    DuplicateRatingPolicy::Replace
}

fn default_client_log_path() -> String {
    "request.log".to_string()
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `KINOTEKA_ENV`)
    /// 3. Environment variables with `KINOTEKA_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("KINOTEKA_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("KINOTEKA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("KINOTEKA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
