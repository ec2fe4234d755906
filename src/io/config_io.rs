use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = "tick.toml";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "TICK_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load configuration for a run.
///
/// An explicit `--config` path must exist and parse. Without one, a
/// `tick.toml` in the working directory is used if present; a missing file
/// just means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = Path::new(CONFIG_FILE);
            if path.exists() {
                read_config(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Resolve the API base URL: `--api-url` flag beats the `TICK_API_URL`
/// environment variable beats the config file (which defaults itself).
/// A trailing slash is stripped so path joining stays uniform.
pub fn resolve_api_url(flag: Option<&str>, config: &Config) -> String {
    let url = flag
        .map(str::to_string)
        .or_else(|| std::env::var(API_URL_ENV).ok())
        .unwrap_or_else(|| config.api.url.clone());
    url.trim_end_matches('/').to_string()
}
