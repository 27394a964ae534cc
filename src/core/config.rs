//! Configuration management for the MCP agent.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the token-info provider.
pub const DEFAULT_TOKEN_INFO_URL: &str = "https://api.sim.dune.com";

/// Default base URL of the chain-status provider.
pub const DEFAULT_CHAIN_STATUS_URL: &str = "https://api-square.kaia.io";

/// Default bound on a single upstream request, in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Secrets consumed by the token-price tool.
    pub credentials: CredentialsConfig,

    /// Upstream data providers.
    pub upstream: UpstreamConfig,
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

/// Secrets read from the environment.
///
/// Both are optional at startup; only `price-token` needs them and it reports
/// their absence per call.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// API key sent as `X-Sim-Api-Key` to the token-info provider.
    pub sim_dune_api_key: Option<String>,

    /// Chain identifier passed as `chain_ids` to the token-info provider.
    pub kaia_chain_id: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "sim_dune_api_key",
                &self.sim_dune_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "kaia_chain_id",
                &self.kaia_chain_id.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Upstream provider endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the token-info provider.
    pub token_info_url: String,

    /// Base URL of the chain-status provider.
    pub chain_status_url: String,

    /// Timeout applied to every upstream request.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            token_info_url: DEFAULT_TOKEN_INFO_URL.to_string(),
            chain_status_url: DEFAULT_CHAIN_STATUS_URL.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "kaia-mcp-agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

/// Read a variable, treating empty values as unset.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...). The two secrets keep their provider names:
    /// `SIM_DUNE_API_KEY` and `KAIA_CHAIN_ID`.
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

        config.credentials.sim_dune_api_key = non_empty_var("SIM_DUNE_API_KEY");
        config.credentials.kaia_chain_id = non_empty_var("KAIA_CHAIN_ID");
        if config.credentials.sim_dune_api_key.is_some() && config.credentials.kaia_chain_id.is_some()
        {
            info!("Token-info credentials loaded from environment");
        } else {
            warn!(
                "SIM_DUNE_API_KEY or KAIA_CHAIN_ID not set - the price-token tool will \
                 report a configuration error when called"
            );
        }

        if let Some(url) = non_empty_var("MCP_TOKEN_INFO_URL") {
            config.upstream.token_info_url = url;
        }

        if let Some(url) = non_empty_var("MCP_CHAIN_STATUS_URL") {
            config.upstream.chain_status_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_UPSTREAM_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.upstream.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_UPSTREAM_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.upstream.timeout_secs
                ),
            }
        }

        config
    }
}
