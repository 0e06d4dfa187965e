//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. All tool behavior lives in `domains/tools`: the catalog of
//! tool definitions, the dispatcher and the remote query gateway. Both
//! handler methods delegate to the catalog, so adding a tool never
//! requires touching this file.
//!
//! Tool models are rebuilt on every `list_tools` request rather than
//! cached at startup: the advertised year bounds must track the current
//! calendar year, exactly like runtime validation does.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use serde_json::Value;
use tracing::instrument;

use super::config::Config;
use crate::domains::tools::{HttpGateway, ToolRegistry};

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp; tool listing and
/// dispatch both go through the `ToolRegistry`.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for tool invocations.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the shared HTTP gateway and the tool registry around it.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let gateway = Arc::new(HttpGateway::new(&config.api)?);

        Ok(Self {
            registry: Arc::new(ToolRegistry::new(gateway)),
            config,
        })
    }

    /// Create a server around an existing registry.
    ///
    /// Lets callers substitute the remote gateway, which is how tests
    /// exercise the full dispatch path without a network.
    pub fn with_registry(config: Config, registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only query tools over the TSE DivulgaCandContas API: \
                 Brazilian electoral candidacies, elections and campaign \
                 finance disclosures."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: ToolRegistry::tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = Value::Object(request.arguments.unwrap_or_default());
        match self.registry.call(&request.name, &arguments).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        }
    }
}
