//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `order_service.url`.
pub const ORDER_SERVICE_URL_ENV: &str = "ORDER_SERVICE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;
    finish(config)
}

/// Load from `path` when given, otherwise start from defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => finish(ClientConfig::default()),
    }
}

fn finish(mut config: ClientConfig) -> Result<ClientConfig, ConfigError> {
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut ClientConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ORDER_SERVICE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.order_service.url = url;
    }
}

/// Where `order_service.url` came from: `"cli"`, `"env"` or `"config"`.
///
/// Loading runs before logging is initialized, so callers report this once
/// the subscriber is installed.
pub fn service_url_source<F>(cli_override: bool, lookup: F) -> &'static str
where
    F: Fn(&str) -> Option<String>,
{
    if cli_override {
        "cli"
    } else if lookup(ORDER_SERVICE_URL_ENV).is_some_and(|v| !v.trim().is_empty()) {
        "env"
    } else {
        "config"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "order-client-{}-{}.toml",
            name,
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_env_override() {
        let mut config = ClientConfig::default();
        apply_env_overrides(&mut config, |key| {
            (key == ORDER_SERVICE_URL_ENV).then(|| "http://orders:9000".to_string())
        });
        assert_eq!(config.order_service.url, "http://orders:9000");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let mut config = ClientConfig::default();
        apply_env_overrides(&mut config, |_| Some("  ".to_string()));
        assert_eq!(config.order_service.url, "http://localhost:8080");
    }

    #[test]
    fn test_service_url_source() {
        let env_set = |key: &str| (key == ORDER_SERVICE_URL_ENV).then(|| "http://orders:9000".to_string());
        assert_eq!(service_url_source(true, env_set), "cli");
        assert_eq!(service_url_source(false, env_set), "env");
        assert_eq!(service_url_source(false, |_| Some(" ".to_string())), "config");
        assert_eq!(service_url_source(false, |_| None), "config");
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp(
            "valid",
            "[observability]\nlog_level = \"debug\"\n[timeouts]\nconnect_secs = 2\n",
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.timeouts.connect_secs, 2);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_invalid_values() {
        let path = write_temp("invalid", "[timeouts]\nrequest_secs = 0\n");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().contains("timeouts.request_secs"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_malformed_toml() {
        let path = write_temp("malformed", "[timeouts\n");
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/order-client.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
