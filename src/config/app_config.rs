use serde::Deserialize;

/// Application configuration
///
/// Loaded from `config/default` and `config/local` files plus `APP__`
/// prefixed environment variables. Secrets (the upstream API key and the
/// store connection string) come from plain environment variables instead,
/// read at state-creation time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub spoonacular: SpoonacularConfig,
    pub storage: StorageConfig,
    pub scorer: ScorerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream provider endpoint settings; the API key is not configured here
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpoonacularConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

/// Persistence backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local storage for development and tests
    Memory,
}

/// External scorer invocation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.spoonacular.com".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["models/recommendation.py".to_string()],
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(config.spoonacular.base_url, "https://api.spoonacular.com");
        assert_eq!(config.scorer.program, "python3");
        assert_eq!(config.scorer.timeout_secs, 30);
    }

    #[test]
    fn test_backend_deserializes_lowercase() {
        let backend: StorageBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(backend, StorageBackend::Memory);
    }
}
