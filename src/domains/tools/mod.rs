//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP agent.
//! Tools are named, schema-validated functions that MCP clients can call.
//!
//! ## Architecture
//!
//! - `schema.rs` - Declarative input schemas and argument validation
//! - `registry.rs` - Registration phase and the frozen tool registry
//! - `executor.rs` - Lookup, validation, execution and result normalization
//! - `handlers.rs` - The handler trait every tool implements
//! - `context.rs` - Per-invocation execution context
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `schema()` and a
//!    `ToolHandler` impl
//! 2. Export it from the parent `mod.rs`
//! 3. Add its `descriptor()` to `definitions::all()`

mod context;
pub mod definitions;
mod error;
mod executor;
mod handlers;
mod registry;
pub mod schema;

pub use context::ExecutionContext;
pub use error::ToolError;
pub use executor::{InvocationRequest, ToolExecutor, UNKNOWN_ERROR, text_result};
pub use handlers::{SharedHandler, ToolHandler, ToolOutput};
pub use registry::{ToolDescriptor, ToolRegistry, ToolRegistryBuilder};
pub use schema::{Arguments, FieldSpec, FieldType, Schema, ValidationError, ValidationReason};
