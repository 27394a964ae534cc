//! Kaia total supply history tool.

use std::sync::Arc;

use serde::Deserialize;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::definitions::common::format_number;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{Arguments, FieldSpec, Schema};

use super::common::fetch_chain_status;

/// Parameters for the total supply tool.
#[derive(Debug, Clone, Deserialize)]
pub struct TotalSupplyParams {
    pub day: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TotalSupplyTool;

impl TotalSupplyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "total-supply-kaia";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "total supply of the kaia chain to make chart";

    pub fn schema() -> Schema {
        Schema::new()
            .field(FieldSpec::number("day").with_default(7))
            .field(FieldSpec::number("size").with_default(100))
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &TotalSupplyParams,
        ctx: &ExecutionContext,
    ) -> Result<serde_json::Value, ToolError> {
        fetch_chain_status(
            ctx,
            &["api", "v1", "kaia", "supply"],
            &[
                ("from", String::new()),
                ("days", format_number(params.day)),
                ("size", format_number(params.size)),
            ],
        )
        .await
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            Some(Self::schema()),
            Arc::new(Self),
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for TotalSupplyTool {
    fn failure_subject(&self) -> &str {
        "total supply of kaia chain"
    }

    async fn call(&self, args: Arguments, ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        let params: TotalSupplyParams = args.parse()?;
        Self::execute(&params, ctx).await.map(ToolOutput::Json)
    }
}
