//! Tool handler contract.
//!
//! Every tool in the catalog implements [`ToolHandler`]. Handlers receive a
//! validated [`Arguments`] set and the per-invocation [`ExecutionContext`]
//! and return a [`ToolOutput`] or a [`ToolError`]. Turning either outcome
//! into a result envelope is the executor's job, not the handler's.

use std::sync::Arc;

use serde_json::Value;

use super::context::ExecutionContext;
use super::error::ToolError;
use super::schema::Arguments;

/// Successful payload produced by a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Text used verbatim as the result content.
    Text(String),

    /// Structured payload, rendered as indented JSON text.
    Json(Value),
}

impl ToolOutput {
    /// Create a text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Render the payload as the text carried in the result envelope.
    pub fn into_text(self) -> Result<String, ToolError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Json(value) => serde_json::to_string_pretty(&value)
                .map_err(|e| ToolError::internal(format!("Failed to render JSON: {}", e))),
        }
    }
}

/// Trait implemented by every tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// What the tool fetches, used in `Error fetching <subject>: ...` texts.
    fn failure_subject(&self) -> &str {
        "tool result"
    }

    /// Execute the tool with validated arguments.
    async fn call(&self, args: Arguments, ctx: &ExecutionContext) -> Result<ToolOutput, ToolError>;
}

/// Shared, type-erased handler reference.
pub type SharedHandler = Arc<dyn ToolHandler>;
