//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the DataForSEO API.
pub const DEFAULT_BASE_URL: &str = "https://api.dataforseo.com";

/// Default request timeout in seconds for upstream calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// DataForSEO API credentials.
    pub credentials: CredentialsConfig,

    /// Upstream API configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the DataForSEO API credentials.
///
/// Requests are authenticated with HTTP Basic auth using the account
/// login and password from https://app.dataforseo.com/api-access.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// DataForSEO account login.
    pub login: Option<String>,

    /// DataForSEO account password.
    pub password: Option<String>,
}

impl CredentialsConfig {
    /// Return the login/password pair if both are configured.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (self.login.as_deref(), self.password.as_deref()) {
            (Some(login), Some(password)) => Some((login, password)),
            _ => None,
        }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Configuration for the upstream DataForSEO API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API. Overridable for testing.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dataforseo-amazon-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server and transport settings use the `MCP_` prefix
    /// (e.g. `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`); upstream API settings
    /// use the `DATAFORSEO_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load DataForSEO credentials
        config.credentials.login = std::env::var("DATAFORSEO_LOGIN").ok();
        config.credentials.password = std::env::var("DATAFORSEO_PASSWORD").ok();
        if config.credentials.pair().is_some() {
            info!("DataForSEO credentials loaded from environment");
        } else {
            warn!(
                "DATAFORSEO_LOGIN / DATAFORSEO_PASSWORD not set - tool calls \
                 will fail until credentials are configured"
            );
        }

        if let Ok(base_url) = std::env::var("DATAFORSEO_BASE_URL") {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = std::env::var("DATAFORSEO_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.api.timeout_secs = secs,
                Err(_) => warn!("Invalid DATAFORSEO_TIMEOUT_SECS value: {}", timeout),
            }
        }

        config
    }
}
