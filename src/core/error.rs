//! Error types and handling for the MCP agent.
//!
//! This module defines a unified error type that can represent errors from
//! the tools domain, the transport layer and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP agent operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP agent.
///
/// Only startup and serving failures end up here. Failures of individual
/// tool calls are reported to the caller as result text and never surface
/// as an `Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain (e.g. a registration conflict).
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
