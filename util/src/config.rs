//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Week used when neither the command line nor `SQL_WEEK` selects one.
pub const DEFAULT_WEEK: u32 = 4;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub data_root: String,
    pub week: u32,
    pub host: String,
    pub port: Option<u16>,
    pub query_row_limit: u32,
    pub sample_row_limit: u32,
    pub max_connections: u32,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {key} value '{raw}', using default");
                default
            }
        },
        Err(_) => default,
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every field has a default; malformed numeric values fall back to it with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "sql-practice".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "true".into()) == "true",
            data_root: env::var("DATA_ROOT").unwrap_or_else(|_| ".".into()),
            week: parse_or("SQL_WEEK", DEFAULT_WEEK),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("SQL_PORT").ok().and_then(|p| p.trim().parse().ok()),
            query_row_limit: parse_or("QUERY_ROW_LIMIT", 1000),
            sample_row_limit: parse_or("SAMPLE_ROW_LIMIT", 5),
            max_connections: parse_or("DB_MAX_CONNECTIONS", 4),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    ///
    /// Used by public per-field setter methods.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_data_root(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.data_root = value.into());
    }

    /// Override the practice week (command line argument wins over `SQL_WEEK`).
    pub fn set_week(value: u32) {
        AppConfig::set_field(|cfg| cfg.week = value);
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: Option<u16>) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_query_row_limit(value: u32) {
        AppConfig::set_field(|cfg| cfg.query_row_limit = value);
    }

    pub fn set_sample_row_limit(value: u32) {
        AppConfig::set_field(|cfg| cfg.sample_row_limit = value);
    }
}

// --- Free accessors, mirroring the fields ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn data_root() -> String {
    AppConfig::global().data_root.clone()
}

pub fn week() -> u32 {
    AppConfig::global().week
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> Option<u16> {
    AppConfig::global().port
}

pub fn query_row_limit() -> u32 {
    AppConfig::global().query_row_limit
}

pub fn sample_row_limit() -> u32 {
    AppConfig::global().sample_row_limit
}

pub fn max_connections() -> u32 {
    AppConfig::global().max_connections
}
