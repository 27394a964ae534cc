//! Transport layer for the MCP agent.
//!
//! This module provides the transport implementations:
//! - **STDIO**: Standard input/output through `rmcp` - feature: `stdio`
//! - **HTTP**: SSE sessions on `/sse` and single-shot JSON-RPC on `/mcp`,
//!   selected by an explicit route table - feature: `http`
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub mod sse;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
