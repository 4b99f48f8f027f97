// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SummaryError};
use crate::models::{Algorithm, Language};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "AUTOSUMMARY";
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub fetch: FetchConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When false the form has no algorithm selector and every request
    /// uses `summary.default_algorithm`.
    pub algorithm_choice: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryConfig {
    pub default_language: Language,
    pub default_sentences: usize,
    pub default_algorithm: Algorithm,
    pub max_input_chars: usize,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Layers built-in defaults, the TOML file and `AUTOSUMMARY__*`
    /// environment variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| SummaryError::Config(e.to_string()))?;
        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SummaryError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SummaryError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8050,
                algorithm_choice: true,
            },
            fetch: FetchConfig {
                timeout_secs: 15,
                user_agent: format!("autosummary/{}", env!("CARGO_PKG_VERSION")),
                max_body_bytes: 5 * 1024 * 1024,
            },
            summary: SummaryConfig {
                default_language: Language::English,
                default_sentences: 10,
                default_algorithm: Algorithm::Lsa,
                max_input_chars: 200_000,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(SummaryError::Config("server.port cannot be 0".to_string()));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(SummaryError::Config(
                "fetch.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.fetch.max_body_bytes == 0 {
            return Err(SummaryError::Config(
                "fetch.max_body_bytes must be greater than 0".to_string(),
            ));
        }

        if self.summary.default_sentences == 0 {
            return Err(SummaryError::Config(
                "summary.default_sentences must be greater than 0".to_string(),
            ));
        }

        if self.summary.max_input_chars == 0 {
            return Err(SummaryError::Config(
                "summary.max_input_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch.timeout(), Duration::from_secs(15));
        assert_eq!(config.summary.default_algorithm, Algorithm::Lsa);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("autosummary.toml");
        fs::write(
            &path,
            "[server]\nport = 9000\nalgorithm_choice = false\n\n[summary]\ndefault_language = \"czech\"\ndefault_algorithm = \"textrank\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(!config.server.algorithm_choice);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.summary.default_language, Language::Czech);
        assert_eq!(config.summary.default_algorithm, Algorithm::TextRank);
        assert_eq!(config.summary.default_sentences, 10);
    }

    #[test]
    fn test_unknown_default_language_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("autosummary.toml");
        fs::write(&path, "[summary]\ndefault_language = \"klingon\"\n").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(SummaryError::Config(_))
        ));
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = Config::default_config();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.summary.default_sentences = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
