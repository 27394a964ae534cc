//! Kaia governance council listing.

use std::sync::Arc;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::Arguments;

use super::common::fetch_chain_status;

#[derive(Debug, Clone, Default)]
pub struct CouncilMembersTool;

impl CouncilMembersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "council-members-kaia";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "get all council members of the kaia chain";

    /// Execute the tool logic. Members are always ordered by staking amount.
    pub async fn execute(ctx: &ExecutionContext) -> Result<serde_json::Value, ToolError> {
        fetch_chain_status(
            ctx,
            &["api", "v1", "councils"],
            &[("order", "staking".to_string())],
        )
        .await
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, None, Arc::new(Self))
    }
}

#[async_trait::async_trait]
impl ToolHandler for CouncilMembersTool {
    fn failure_subject(&self) -> &str {
        "council member of kaia chain"
    }

    async fn call(&self, _args: Arguments, ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        Self::execute(ctx).await.map(ToolOutput::Json)
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
    async fn test_fixed_ordering() {
        let server = MockServer::start().await;
        let body = json!([{"name": "Kakao", "staking": "100"}]);
        Mock::given(method("GET"))
            .and(path("/api/v1/councils"))
            .and(query_param("order", "staking"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = test_context(&server.uri(), None, None);
        assert_eq!(CouncilMembersTool::execute(&ctx).await.unwrap(), body);
    }
}
