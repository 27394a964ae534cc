//! Kaia account count history tool.

use std::sync::Arc;

use serde::Deserialize;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::definitions::common::format_number;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{Arguments, FieldSpec, Schema};

use super::common::fetch_chain_status;

/// Parameters for the accounts count tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsCountParams {
    pub month: f64,
}

#[derive(Debug, Clone, Default)]
pub struct AccountsCountTool;

impl AccountsCountTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "accounts-count-kaia";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "total accounts count of the kaia chain to make chart";

    pub fn schema() -> Schema {
        Schema::new().field(FieldSpec::number("month").with_default(12))
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &AccountsCountParams,
        ctx: &ExecutionContext,
    ) -> Result<serde_json::Value, ToolError> {
        fetch_chain_status(
            ctx,
            &["api", "v1", "status", "account"],
            &[("months", format_number(params.month))],
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
impl ToolHandler for AccountsCountTool {
    fn failure_subject(&self) -> &str {
        "accounts count of kaia chain"
    }

    async fn call(&self, args: Arguments, ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        let params: AccountsCountParams = args.parse()?;
        Self::execute(&params, ctx).await.map(ToolOutput::Json)
    }
}
