//! Tool Registry - central dispatch for all tools.
//!
//! The registry is the single entry point mapping an invocation (tool
//! name + raw arguments) to a rendered text result. Dispatch runs in
//! strict sequence: catalog lookup, whole-object validation, endpoint
//! resolution, one remote fetch, rendering. The first failing stage
//! aborts the rest and its error propagates unchanged.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;
use tracing::{debug, info};

use super::catalog::{self, CATALOG};
use super::error::ToolError;
use super::gateway::DivulgaApi;
use super::schema;

/// Tool registry - dispatches invocations against the fixed catalog.
///
/// Stateless across invocations: the only shared piece is the gateway,
/// and concurrent calls never observe each other.
pub struct ToolRegistry {
    gateway: Arc<dyn DivulgaApi>,
}

impl ToolRegistry {
    /// Create a new tool registry around a remote gateway.
    pub fn new(gateway: Arc<dyn DivulgaApi>) -> Self {
        Self { gateway }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names() -> Vec<&'static str> {
        CATALOG.iter().map(|tool| tool.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised catalog.
    /// Models are built fresh on every call; the year bounds they carry
    /// must reflect the calendar year at listing time.
    pub fn tools() -> Vec<Tool> {
        CATALOG.iter().map(|tool| tool.to_tool()).collect()
    }

    /// Invoke a tool by name with a raw arguments object.
    ///
    /// Returns the rendered result text, or the first stage error. An
    /// unknown name fails before validation or any network activity.
    pub async fn call(&self, name: &str, arguments: &Value) -> Result<String, ToolError> {
        let tool = catalog::find(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let params =
            schema::validate(tool.fields, arguments).map_err(ToolError::Validation)?;

        let path = (tool.path)(&params);
        debug!(tool = name, %path, "dispatching remote query");

        let data = self.gateway.get(&path).await?;

        info!(tool = name, "tool call completed");
        Ok((tool.render)(&params, &data))
    }
}
