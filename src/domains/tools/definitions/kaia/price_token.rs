//! Token price lookup against the token-info provider.
//!
//! Requires two secrets: the provider API key and the chain identifier.
//! Both are checked before any request is made.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{Arguments, FieldSpec, Schema};

use super::common::{endpoint, fetch_json};

/// Header carrying the provider API key.
pub const API_KEY_HEADER: &str = "X-Sim-Api-Key";

/// Parameters for the token price tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTokenParams {
    pub token_address: String,
}

#[derive(Debug, Clone, Default)]
pub struct PriceTokenTool;

impl PriceTokenTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "price-token";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "check the price of the token";

    pub fn schema() -> Schema {
        Schema::new().field(
            FieldSpec::string("tokenAddress").describe("Contract address of the token"),
        )
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &PriceTokenParams,
        ctx: &ExecutionContext,
    ) -> Result<serde_json::Value, ToolError> {
        let credentials = ctx.credentials();
        let api_key = credentials
            .sim_dune_api_key
            .as_deref()
            .ok_or(ToolError::NotConfigured("SIM_DUNE_API_KEY"))?;
        let chain_id = credentials
            .kaia_chain_id
            .as_deref()
            .ok_or(ToolError::NotConfigured("KAIA_CHAIN_ID"))?;

        let url = endpoint(
            &ctx.upstream().token_info_url,
            &["v1", "evm", "token-info", &params.token_address],
            &[("chain_ids", chain_id.to_string())],
        )?;

        info!("Fetching token info for {}", params.token_address);
        fetch_json(ctx.client().get(url).header(API_KEY_HEADER, api_key)).await
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
impl ToolHandler for PriceTokenTool {
    fn failure_subject(&self) -> &str {
        "token data"
    }

    async fn call(&self, args: Arguments, ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        let params: PriceTokenParams = args.parse()?;
        Self::execute(&params, ctx).await.map(ToolOutput::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::kaia::common::test_context;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "0x19aac5f612f524b754ca7e7c41cbfa2e981a4432";

    fn params() -> PriceTokenParams {
        PriceTokenParams {
            token_address: TOKEN.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_makes_no_request() {
        let server = MockServer::start().await;
        let ctx = test_context(&server.uri(), None, Some("8217"));

        let err = PriceTokenTool::execute(&params(), &ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "SIM_DUNE_API_KEY is not configured");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_chain_id_makes_no_request() {
        let server = MockServer::start().await;
        let ctx = test_context(&server.uri(), Some("key"), None);

        let err = PriceTokenTool::execute(&params(), &ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "KAIA_CHAIN_ID is not configured");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_forwards_key_and_chain() {
        let server = MockServer::start().await;
        let body = json!({"tokens": [{"symbol": "USDT", "price_usd": 1.0}]});
        Mock::given(method("GET"))
            .and(path(format!("/v1/evm/token-info/{}", TOKEN)))
            .and(query_param("chain_ids", "8217"))
            .and(header(API_KEY_HEADER, "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = test_context(&server.uri(), Some("secret"), Some("8217"));
        let value = PriceTokenTool::execute(&params(), &ctx).await.unwrap();
        assert_eq!(value, body);
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = test_context(&server.uri(), Some("bad"), Some("8217"));
        let err = PriceTokenTool::execute(&params(), &ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "API request failed with status 401");
    }
}
