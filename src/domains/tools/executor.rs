//! Invocation executor.
//!
//! Runs one tool call end to end: lookup, schema validation, handler
//! execution and normalization into a [`CallToolResult`]. The executor never
//! fails outward. Unknown tools, invalid arguments, handler errors and
//! handler panics all come back as a single text block inside an ordinary
//! result envelope.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{debug, error, info, instrument, warn};

use crate::core::config::Config;

use super::context::ExecutionContext;
use super::error::ToolError;
use super::registry::ToolRegistry;

/// Text used when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// One call to execute a named tool.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    pub tool_name: String,
    pub arguments: Option<JsonObject>,
}

impl InvocationRequest {
    pub fn new(tool_name: impl Into<String>, arguments: Option<JsonObject>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// Executes invocations against a frozen registry.
#[derive(Clone)]
pub struct ToolExecutor {
    registry: Arc<ToolRegistry>,
    config: Arc<Config>,
    client: reqwest::Client,
}

impl ToolExecutor {
    /// Create an executor with an HTTP client bounded by the upstream timeout.
    pub fn new(registry: Arc<ToolRegistry>, config: Arc<Config>) -> Result<Self, ToolError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ToolError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            registry,
            config,
            client,
        })
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Execute one invocation and return its result envelope.
    #[instrument(skip(self, request), fields(tool = %request.tool_name))]
    pub async fn execute(
        &self,
        request: InvocationRequest,
        session_id: Option<&str>,
    ) -> CallToolResult {
        let descriptor = match self.registry.lookup(&request.tool_name) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!("Unknown tool requested: {}", request.tool_name);
                return text_result(e.to_string());
            }
        };

        let args = match descriptor.validate(request.arguments.as_ref()) {
            Ok(args) => args,
            Err(e) => {
                warn!("Rejected arguments for {}: {}", descriptor.name(), e);
                return text_result(format!("Error: {}", e));
            }
        };

        let ctx = ExecutionContext::new(
            self.config.clone(),
            self.client.clone(),
            session_id.map(str::to_string),
        );
        let handler = descriptor.handler();

        debug!("Invoking handler for {}", descriptor.name());
        let outcome = AssertUnwindSafe(handler.call(args, &ctx))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(ToolError::internal("tool handler panicked")))
            .and_then(|output| output.into_text());

        match outcome {
            Ok(text) => {
                info!("Tool {} completed", descriptor.name());
                text_result(text)
            }
            Err(e) => {
                error!("Tool {} failed: {}", descriptor.name(), e);
                text_result(failure_text(handler.failure_subject(), &e))
            }
        }
    }
}

/// Wrap text as a single-block result.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn failure_text(subject: &str, err: &ToolError) -> String {
    let message = err.to_string();
    let message = if message.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        message.as_str()
    };
    format!("Error fetching {}: {}", subject, message)
}
