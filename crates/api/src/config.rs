//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use generation::GeminiConfig;
use generation::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration.
///
/// Reads from environment variables (a `.env` file is loaded first by `main`):
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `8000`)
/// - `GEMINI_API_KEY`: required
/// - `GEMINI_MODEL`: model name (default: `"gemini-2.5-flash"`)
/// - `GEMINI_BASE_URL`: models endpoint root
/// - `GEMINI_TIMEOUT_SECS`: outbound request timeout (default: `60`)
/// - `INDEX_PATH`: HTML document served at `/` (default: `"index.html"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gemini: GeminiConfig,
    pub index_path: PathBuf,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let gemini = GeminiConfig::new(api_key)
            .with_model(lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .with_base_url(lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .with_timeout_seconds(parse_or(
                &lookup,
                "GEMINI_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?);

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8000)?,
            gemini,
            index_path: lookup("INDEX_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("index.html")),
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[("GEMINI_API_KEY", "abc")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.gemini.api_key, "abc");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout_seconds, 60);
        assert_eq!(config.index_path, PathBuf::from("index.html"));
    }

    #[test]
    fn test_missing_api_key() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            load(&[("GEMINI_API_KEY", "   ")]),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("GEMINI_API_KEY", "abc"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_TIMEOUT_SECS", "15"),
            ("INDEX_PATH", "static/index.html"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.timeout_seconds, 15);
        assert_eq!(config.index_path, PathBuf::from("static/index.html"));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("GEMINI_API_KEY", "abc"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }
}
