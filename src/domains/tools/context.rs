//! Per-invocation execution context.

use std::sync::Arc;

use crate::core::config::{Config, CredentialsConfig, UpstreamConfig};

/// Read-only view handed to a handler for the duration of one call.
///
/// Built fresh by the executor for every invocation and dropped when the
/// handler returns. The HTTP client is shared; it is cheap to clone and
/// carries the upstream timeout.
#[derive(Clone)]
pub struct ExecutionContext {
    config: Arc<Config>,
    client: reqwest::Client,
    session_id: Option<String>,
}

impl ExecutionContext {
    pub fn new(config: Arc<Config>, client: reqwest::Client, session_id: Option<String>) -> Self {
        Self {
            config,
            client,
            session_id,
        }
    }

    pub fn credentials(&self) -> &CredentialsConfig {
        &self.config.credentials
    }

    pub fn upstream(&self) -> &UpstreamConfig {
        &self.config.upstream
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Streaming session this invocation arrived on, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
}
