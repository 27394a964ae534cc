//! Common utilities shared across the upstream proxy tools.
//!
//! This module provides URL construction against a configured base URL and
//! the single GET-and-decode step every proxy tool performs.

use reqwest::{RequestBuilder, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::error::ToolError;

/// Build `base/segments...?query` with path segments percent-encoded.
pub fn endpoint(base: &str, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ToolError> {
    let mut url = Url::parse(base)
        .map_err(|e| ToolError::upstream(format!("Invalid upstream URL '{}': {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| ToolError::upstream(format!("Invalid upstream URL '{}'", base)))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        let encoded = serde_urlencoded::to_string(query).map_err(ToolError::upstream)?;
        url.set_query(Some(&encoded));
    }

    Ok(url)
}

/// Send a prepared request and decode the JSON body.
///
/// Non-success statuses become [`ToolError::UpstreamStatus`]. No retry is
/// attempted; the request timeout comes from the shared client.
pub async fn fetch_json(request: RequestBuilder) -> Result<Value, ToolError> {
    let response = request.send().await?;
    let status = response.status();
    debug!("Upstream {} answered {}", response.url(), status);

    if !status.is_success() {
        warn!("Upstream request failed with status {}", status);
        return Err(ToolError::UpstreamStatus(status.as_u16()));
    }

    Ok(response.json::<Value>().await?)
}

/// GET a path on the chain-status provider.
pub async fn fetch_chain_status(
    ctx: &ExecutionContext,
    segments: &[&str],
    query: &[(&str, String)],
) -> Result<Value, ToolError> {
    let url = endpoint(&ctx.upstream().chain_status_url, segments, query)?;
    fetch_json(ctx.client().get(url)).await
}

#[cfg(test)]
pub(crate) fn test_context(
    base: &str,
    api_key: Option<&str>,
    chain_id: Option<&str>,
) -> ExecutionContext {
    use crate::core::config::Config;
    use std::sync::Arc;

    let mut config = Config::default();
    config.upstream.token_info_url = base.to_string();
    config.upstream.chain_status_url = base.to_string();
    config.credentials.sim_dune_api_key = api_key.map(str::to_string);
    config.credentials.kaia_chain_id = chain_id.map(str::to_string);

    ExecutionContext::new(Arc::new(config), reqwest::Client::new(), None)
}
