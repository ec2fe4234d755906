use serde::{Deserialize, Serialize};

/// Configuration from tick.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the todo service
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig { url: default_url() }
    }
}

fn default_url() -> String {
    "http://localhost:8080".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_default_url() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.url, "http://localhost:8080");
    }

    #[test]
    fn api_url_parses() {
        let config: Config = toml::from_str("[api]\nurl = \"http://todo.local:9000\"\n").unwrap();
        assert_eq!(config.api.url, "http://todo.local:9000");
    }
}
