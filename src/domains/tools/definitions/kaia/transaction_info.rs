//! Kaia transaction statistics tool.

use std::sync::Arc;

use serde::Deserialize;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::definitions::common::format_number;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{Arguments, FieldSpec, Schema};

use super::common::fetch_chain_status;

/// Parameters for the transaction info tool.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInfoParams {
    pub day: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionInfoTool;

impl TransactionInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "transaction-info-kaia";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "tx info of the kaia chain to make chart";

    pub fn schema() -> Schema {
        Schema::new().field(FieldSpec::number("day").with_default(7))
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &TransactionInfoParams,
        ctx: &ExecutionContext,
    ) -> Result<serde_json::Value, ToolError> {
        fetch_chain_status(
            ctx,
            &["api", "v1", "status", "tx_info"],
            &[("days", format_number(params.day))],
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
impl ToolHandler for TransactionInfoTool {
    fn failure_subject(&self) -> &str {
        "transaction info of kaia chain"
    }

    async fn call(&self, args: Arguments, ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        let params: TransactionInfoParams = args.parse()?;
        Self::execute(&params, ctx).await.map(ToolOutput::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::kaia::common::test_context;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_day_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/status/tx_info"))
            .and(query_param("days", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = test_context(&server.uri(), None, None);
        let value = TransactionInfoTool::execute(&TransactionInfoParams { day: 30.0 }, &ctx)
            .await
            .unwrap();
        assert_eq!(value["count"], 42);
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = test_context(&server.uri(), None, None);
        let err = TransactionInfoTool::execute(&TransactionInfoParams { day: 7.0 }, &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UpstreamStatus(500)));
    }
}
