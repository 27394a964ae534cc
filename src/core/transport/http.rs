//! HTTP transport implementation.
//!
//! One listener serves both connection styles. Inbound requests are
//! classified by path through the [`Route`] table:
//! - `GET <base>/sse` opens a streaming session, `POST <base>/sse` and
//!   `POST <base>/sse/message` deliver frames into it (see [`super::sse`])
//! - `POST <base>/mcp` carries exactly one JSON-RPC frame and its response
//! - anything else is answered with `404 Not found` without touching the
//!   protocol layer

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, post},
};
use bytes::Bytes;
use http::{StatusCode, Uri};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::sse::{self, SessionTable};
use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::protocol::{JsonRpcRequest, JsonRpcResponse};

/// Body returned for unmatched paths.
pub const NOT_FOUND_BODY: &str = "Not found";

// ============================================================================
// Route table
// ============================================================================

/// Connection style served by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Streaming,
    SingleShot,
}

/// Every path the HTTP transport answers, relative to the base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET` opens a stream, `POST` delivers a frame.
    Stream,
    /// `POST` delivers a frame to an open stream.
    StreamMessage,
    /// `POST` one frame, receive one response.
    SingleShot,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Stream, Route::StreamMessage, Route::SingleShot];

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Stream => "/sse",
            Self::StreamMessage => "/sse/message",
            Self::SingleShot => "/mcp",
        }
    }

    pub fn variant(self) -> Variant {
        match self {
            Self::Stream | Self::StreamMessage => Variant::Streaming,
            Self::SingleShot => Variant::SingleShot,
        }
    }

    /// HTTP methods accepted on this route.
    pub fn methods(self) -> &'static str {
        match self {
            Self::Stream => "GET, POST",
            Self::StreamMessage | Self::SingleShot => "POST",
        }
    }

    fn method_router(self) -> MethodRouter<AppState> {
        match self {
            Self::Stream => get(sse::open_stream).post(sse::post_message),
            Self::StreamMessage => post(sse::post_message),
            Self::SingleShot => post(handle_single_shot),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    pub(super) server: McpServer,
    /// Open streaming sessions.
    pub(super) sessions: SessionTable,
    /// Path advertised to streaming clients for posting frames.
    pub(super) message_path: Arc<str>,
    /// Interval between SSE keep-alive comments.
    pub(super) keep_alive: Duration,
}

/// Build the router for the given server and configuration.
pub fn build_router(server: McpServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server,
        sessions: SessionTable::default(),
        message_path: config.path(Route::StreamMessage.suffix()).into(),
        keep_alive: Duration::from_secs(config.keep_alive_secs.max(1)),
    };

    let mut router = Router::new();
    for route in Route::ALL {
        router = router.route(&config.path(route.suffix()), route.method_router());
    }

    let mut app = router
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        for route in Route::ALL {
            info!(
                "  → {:?} {} [{}]",
                route.variant(),
                self.config.path(route.suffix()),
                route.methods()
            );
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Fallback for every path outside the route table.
async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Parse a JSON-RPC frame from a raw body.
pub(super) fn parse_frame(body: &[u8]) -> Result<JsonRpcRequest, JsonRpcResponse> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("Failed to parse JSON-RPC frame: {}", e);
        JsonRpcResponse::parse_error(e)
    })
}

/// Handle a single-shot request: one frame in, one response out.
#[instrument(skip_all)]
async fn handle_single_shot(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match parse_frame(&body) {
        Ok(request) => request,
        Err(response) => return (StatusCode::BAD_REQUEST, Json(response)).into_response(),
    };

    info!("Received single-shot request: {}", request.method);

    match state.server.handle_request(request, None).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use axum::body::Body;
    use http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let server = McpServer::new(Config::default()).unwrap();
        build_router(server, &HttpConfig::default())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[test]
    fn test_route_table() {
        let table: Vec<_> = Route::ALL
            .into_iter()
            .map(|route| (route.suffix(), route.variant(), route.methods()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("/sse", Variant::Streaming, "GET, POST"),
                ("/sse/message", Variant::Streaming, "POST"),
                ("/mcp", Variant::SingleShot, "POST"),
            ]
        );
    }

    #[tokio::test]
    async fn test_every_route_is_mounted() {
        let server = McpServer::new(Config::default()).unwrap();
        let config = HttpConfig {
            base_path: "/agent".to_string(),
            ..HttpConfig::default()
        };
        let app = build_router(server, &config);
        let frame = json!({"jsonrpc": "2.0", "id": 1, "method": "ping"});

        for route in Route::ALL {
            let response = app
                .clone()
                .oneshot(post_json(&config.path(route.suffix()), &frame))
                .await
                .unwrap();
            assert_ne!(response.status(), StatusCode::NOT_FOUND, "route {:?}", route);

            let response = app
                .clone()
                .oneshot(post_json(route.suffix(), &frame))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "route {:?}", route);
        }
    }

    #[tokio::test]
    async fn test_unmatched_path_is_not_found() {
        for path in ["/", "/health", "/sse/other", "/mcpx"] {
            let response = app()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {}", path);
            assert_eq!(body_bytes(response).await, NOT_FOUND_BODY.as_bytes());
        }
    }

    #[tokio::test]
    async fn test_single_shot_tools_call() {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "add", "arguments": {"a": 2, "b": 3}}
        });
        let response = app().oneshot(post_json("/mcp", &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["result"]["content"][0]["type"], "text");
        assert_eq!(json["result"]["content"][0]["text"], "5");
    }

    #[tokio::test]
    async fn test_single_shot_multiply_label() {
        let request = json!({
            "jsonrpc": "2.0",
            "id": "m",
            "method": "tools/call",
            "params": {"name": "multiply", "arguments": {"a": 2, "b": 3}}
        });
        let response = app().oneshot(post_json("/mcp", &request)).await.unwrap();
        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["result"]["content"][0]["text"], "Here are result: 5");
    }

    #[tokio::test]
    async fn test_single_shot_parse_error() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/mcp")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["error"]["code"], crate::core::protocol::PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_single_shot_notification_is_accepted() {
        let request = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        let response = app().oneshot(post_json("/mcp", &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_single_shot_rejects_get() {
        let response = app()
            .oneshot(Request::builder().uri("/mcp").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_base_path_prefixes_routes() {
        let server = McpServer::new(Config::default()).unwrap();
        let config = HttpConfig {
            base_path: "/agent".to_string(),
            ..HttpConfig::default()
        };
        let app = build_router(server, &config);
        let request = json!({"jsonrpc": "2.0", "id": 1, "method": "ping"});

        let response = app.clone().oneshot(post_json("/agent/mcp", &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(post_json("/mcp", &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
