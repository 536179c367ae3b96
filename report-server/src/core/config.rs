/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 8000 | HTTP port |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Fallback log filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Grace period for in-flight requests on shutdown |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=9000 LOG_LEVEL=debug cargo run -p report-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    pub log_level: String,
    /// Log file directory; stdout only when unset
    pub log_dir: Option<String>,
    /// Shutdown grace period (milliseconds)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            http_port: 8000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            shutdown_timeout_ms: 10000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(config.is_development());
        assert!(!config.is_production());
        assert!(config.log_dir.is_none());
    }
}
