use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::engine_info;
use headlines_core::ListQuery;
use headlines_engine::FetchSettings;
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub(crate) const DEFAULT_CONFIG_FILENAME: &str = "headlines.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub country: String,
    pub page_size: u32,
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub request_timeout_secs: u64,
    /// Rows shown per screen; also the scroll step.
    pub viewport_rows: usize,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let query = ListQuery::default();
        let fetch = FetchSettings::default();
        Self {
            country: query.country,
            page_size: query.page_size,
            base_url: fetch.base_url,
            api_key_env: "NEWS_API_KEY".to_string(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            viewport_rows: 8,
            log_destination: LogDestination::File,
        }
    }
}

impl AppConfig {
    /// Loads `path`, or `./headlines.ron` when no path is given. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));

        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                engine_info!("No config at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config: AppConfig =
            ron::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        config.validate()?;
        engine_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        if self.country.trim().is_empty() {
            return Err(ConfigError::Invalid("country must not be empty".into()));
        }
        if self.viewport_rows == 0 {
            return Err(ConfigError::Invalid("viewport_rows must be at least 1".into()));
        }
        Ok(())
    }

    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            country: self.country.clone(),
            page_size: self.page_size,
        }
    }

    /// Fetch settings with the API key read from `api_key_env`.
    pub fn fetch_settings(&self) -> FetchSettings {
        let api_key = std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        self.fetch_settings_with_key(api_key)
    }

    pub fn fetch_settings_with_key(&self, api_key: Option<String>) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            api_key,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }
}
