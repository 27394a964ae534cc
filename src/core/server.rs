//! MCP Server implementation and lifecycle management.
//!
//! This module contains the protocol handler shared by every transport.
//! The HTTP transports feed parsed JSON-RPC frames into
//! [`McpServer::handle_request`]; the stdio transport goes through the
//! `rmcp` [`ServerHandler`] implementation. Both end in the same
//! [`ToolExecutor`], so a tool behaves identically on every transport.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered once in `definitions::all()`. The registry is frozen
//! before the server is constructed.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::config::Config;
use super::error::Result;
use super::protocol::{CallToolParams, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
use crate::domains::tools::{InvocationRequest, ToolExecutor, ToolRegistry};

/// Instructions advertised to clients during `initialize`.
pub const INSTRUCTIONS: &str = "Kaia chain data and calculator tools. Every tool call returns a \
     single text result; failures are described in the text itself.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Executor bound to the frozen tool registry.
    executor: ToolExecutor,
}

impl McpServer {
    /// Create a new MCP server with the full tool catalog.
    ///
    /// Fails if the catalog contains conflicting tool names.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::with_default_tools()?;
        Self::with_registry(config, registry)
    }

    /// Create a server around an already built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Result<Self> {
        let config = Arc::new(config);
        let executor = ToolExecutor::new(Arc::new(registry), config.clone())?;
        info!("Registered {} tools", executor.registry().len());

        Ok(Self { config, executor })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.executor.registry()
    }

    /// List all available tools, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry().to_tools()
    }

    /// Execute one tool invocation.
    pub async fn call_tool(
        &self,
        request: InvocationRequest,
        session_id: Option<&str>,
    ) -> CallToolResult {
        self.executor.execute(request, session_id).await
    }

    // ========================================================================
    // JSON-RPC dispatch (HTTP transports)
    // ========================================================================

    /// Route a JSON-RPC frame to the matching MCP method.
    ///
    /// Returns `None` for notifications.
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn handle_request(
        &self,
        request: JsonRpcRequest,
        session_id: Option<&str>,
    ) -> Option<JsonRpcResponse> {
        if request.jsonrpc != "2.0" {
            warn!("Unsupported JSON-RPC version: {}", request.jsonrpc);
            return Some(JsonRpcResponse::invalid_request(request.id));
        }

        if request.is_notification() {
            debug!("Received notification: {}", request.method);
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params, session_id).await,
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            method => {
                warn!("Unknown method: {}", method);
                JsonRpcResponse::method_not_found(request.id, method)
            }
        };

        Some(response)
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        info!("Processing initialize request");

        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": self.name(),
                    "version": self.version()
                },
                "instructions": INSTRUCTIONS
            }),
        )
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({ "tools": self.list_tools() }))
    }

    async fn handle_tools_call(
        &self,
        id: Option<Value>,
        params: Option<Value>,
        session_id: Option<&str>,
    ) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::invalid_params(id, "Missing params");
        };

        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => return JsonRpcResponse::invalid_params(id, format!("Invalid params: {}", e)),
        };

        let arguments = match params.arguments {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                return JsonRpcResponse::invalid_params(id, "Tool arguments must be an object");
            }
        };

        let result = self
            .call_tool(InvocationRequest::new(params.name, arguments), session_id)
            .await;

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::internal_error(id, format!("Serialization error: {}", e)),
        }
    }
}

/// ServerHandler implementation used by the stdio transport.
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: McpServer::list_tools(self),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let invocation = InvocationRequest::new(request.name.to_string(), request.arguments);
        Ok(McpServer::call_tool(self, invocation, None).await)
    }
}
