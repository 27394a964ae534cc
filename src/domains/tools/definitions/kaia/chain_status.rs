//! Kaia chain status tool.

use std::sync::Arc;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::Arguments;

use super::common::fetch_chain_status;

/// Chain overview: gas, supply, market cap, burning and fees. Takes no arguments.
#[derive(Debug, Clone, Default)]
pub struct ChainStatusTool;

impl ChainStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "kaia-chain";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "status of the kaia chain - about: gas, supply, marrket cap, burning, fee";

    /// Execute the tool logic.
    pub async fn execute(ctx: &ExecutionContext) -> Result<serde_json::Value, ToolError> {
        fetch_chain_status(ctx, &["api", "v1", "status", "kaia"], &[]).await
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, None, Arc::new(Self))
    }
}

#[async_trait::async_trait]
impl ToolHandler for ChainStatusTool {
    fn failure_subject(&self) -> &str {
        "status of kaia chain"
    }

    async fn call(&self, _args: Arguments, ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        Self::execute(ctx).await.map(ToolOutput::Json)
    }
}
