//! Kaia MCP Agent Library
//!
//! An MCP agent exposing Kaia chain data lookups and small calculator tools
//! to AI assistants.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, JSON-RPC protocol types, the protocol
//!   handler ([`McpServer`]) and the transports (stdio, SSE, single-shot HTTP)
//! - **domains::tools**: the schema descriptor, the frozen tool registry,
//!   the invocation executor and the tool handler set
//!
//! # Example
//!
//! ```rust,no_run
//! use kaia_mcp_agent::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
