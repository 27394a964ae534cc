//! Kaia staking and APY history per council member.

use std::sync::Arc;

use serde::Deserialize;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::definitions::common::format_number;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{Arguments, FieldSpec, Schema};

use super::common::fetch_chain_status;

/// Parameters for the staking info tool.
///
/// A `councilId` of `-1` selects the whole network.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingInfoParams {
    pub council_id: f64,
    pub day: f64,
}

#[derive(Debug, Clone, Default)]
pub struct StakingInfoTool;

impl StakingInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "staking-info-kaia-by-council";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "staking info kaia by council with apy to make chart";

    pub fn schema() -> Schema {
        Schema::new()
            .field(FieldSpec::number("councilId").with_default(-1))
            .field(FieldSpec::number("day").with_default(30))
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &StakingInfoParams,
        ctx: &ExecutionContext,
    ) -> Result<serde_json::Value, ToolError> {
        fetch_chain_status(
            ctx,
            &["api", "v1", "status", "staking"],
            &[
                ("cid", format_number(params.council_id)),
                ("days", format_number(params.day)),
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
impl ToolHandler for StakingInfoTool {
    fn failure_subject(&self) -> &str {
        "staking by counctil on kaia chain"
    }

    async fn call(&self, args: Arguments, ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        let params: StakingInfoParams = args.parse()?;
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

    #[test]
    fn test_params_from_defaults() {
        let params: StakingInfoParams = StakingInfoTool::schema()
            .validate(None)
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(params.council_id, -1.0);
        assert_eq!(params.day, 30.0);
    }

    #[tokio::test]
    async fn test_council_and_day_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/status/staking"))
            .and(query_param("cid", "-1"))
            .and(query_param("days", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apy": 4.5})))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = test_context(&server.uri(), None, None);
        let params = StakingInfoParams {
            council_id: -1.0,
            day: 30.0,
        };
        let value = StakingInfoTool::execute(&params, &ctx).await.unwrap();
        assert_eq!(value["apy"], 4.5);
    }
}
