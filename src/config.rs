//! Application configuration management.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::sync::OnceLock;

/// Global configuration instance.
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Base path prefix for history-mode routing (empty for root).
    pub base_path: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json or pretty).
    pub log_format: LogFormat,
    /// Allowed CORS origins (comma-separated, or * for all).
    pub cors_origins: Vec<String>,
}

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable colored output.
    Pretty,
    /// JSON structured logging for production.
    Json,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if required configuration is missing or invalid.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        let base_path = std::env::var("BASE_PATH").unwrap_or_default();

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port,
            base_path,
            log_level,
            log_format,
            cors_origins,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.is_empty() {
            if !self.base_path.starts_with('/') {
                return Err(ConfigError::BasePathMissingLeadingSlash(
                    self.base_path.clone(),
                ));
            }
            if self.base_path.ends_with('/') {
                return Err(ConfigError::BasePathTrailingSlash(self.base_path.clone()));
            }
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BASE_PATH must start with '/': {0}")]
    BasePathMissingLeadingSlash(String),

    #[error("BASE_PATH must not end with '/': {0}")]
    BasePathTrailingSlash(String),
}

/// Initialize the global configuration.
///
/// Should be called once at application startup.
pub fn init() -> &'static Config {
    CONFIG.get_or_init(|| {
        dotenvy::dotenv().ok();
        Config::from_env()
    })
}

/// Get the global configuration.
///
/// # Panics
/// Panics if configuration has not been initialized.
pub fn get() -> &'static Config {
    CONFIG.get().expect("Configuration not initialized. Call config::init() first.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("BASE_PATH");
        std::env::remove_var("LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_path, "");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_base_path_validation() {
        let mut config = Config::from_env();

        config.base_path = String::new();
        assert!(config.validate().is_ok());

        config.base_path = "/player".to_string();
        assert!(config.validate().is_ok());

        config.base_path = "player".to_string();
        assert!(config.validate().is_err());

        config.base_path = "/player/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cors_origins_parsing() {
        std::env::set_var("CORS_ORIGINS", "http://localhost:3000, http://example.com");

        let config = Config::from_env();

        assert_eq!(config.cors_origins.len(), 2);
        assert!(config.cors_origins.contains(&"http://localhost:3000".to_string()));
        assert!(config.cors_origins.contains(&"http://example.com".to_string()));

        std::env::remove_var("CORS_ORIGINS");
    }
}
