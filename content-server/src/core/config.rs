use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | SEED_FILE | (unset) | JSON file with initial collections |
/// | ENVIRONMENT | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 SEED_FILE=./seed.json cargo run -p content-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    pub log_level: String,
    /// Log to stdout only when unset
    pub log_dir: Option<String>,
    /// Collections to start from; empty collections when unset
    pub seed_file: Option<PathBuf>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            seed_file: std::env::var("SEED_FILE")
                .ok()
                .filter(|f| !f.is_empty())
                .map(PathBuf::from),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the port, keeping everything else from the environment.
    ///
    /// Port 0 binds an ephemeral port, which is what tests use.
    pub fn with_port(http_port: u16) -> Self {
        Self {
            http_port,
            ..Self::from_env()
        }
    }

    pub fn with_seed_file(mut self, seed_file: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(seed_file.into());
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
