//! Process settings: optional `config.toml`, then `CAL_`-prefixed environment variables.
//!
//! Nested keys use a double underscore, e.g. `CAL_SERVER__PORT=9090` or
//! `CAL_STORAGE__BACKEND=memory`.

use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    #[serde(default)]
    pub frontend: FrontendSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub path: String,
    pub pool_size: u32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FrontendSettings {
    /// Directory served for paths no API route matches.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LogSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

fn environment() -> Environment {
    Environment::with_prefix("CAL")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(File::with_name("config").required(false), environment())
    }

    fn from_sources<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("storage.backend", "sqlite")?
            .set_default("storage.path", "calendar.db")?
            .set_default("storage.pool_size", 8_i64)?
            .set_default("log.level", "info")?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
