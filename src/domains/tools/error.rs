//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool registration or execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// A tool was registered without a name.
    #[error("Tool name must not be empty")]
    EmptyName,

    /// A tool with the same name was already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// A configuration value the tool depends on is absent.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The upstream provider answered with a non-success status.
    #[error("API request failed with status {0}")]
    UpstreamStatus(u16),

    /// The upstream request failed (network, timeout, undecodable body).
    #[error("{0}")]
    Upstream(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "duplicate tool" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Create a new upstream failure from any displayable error.
    pub fn upstream(err: impl std::fmt::Display) -> Self {
        Self::Upstream(err.to_string())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        Self::upstream(err)
    }
}
