//! STDIO transport implementation.
//!
//! The calling agent owns this process and speaks MCP over stdin and
//! stdout; logs go to stderr. This is the only transport the server
//! supports.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve the DivulgaCandContas tool catalog over stdin/stdout.
    ///
    /// Blocks until the client closes the session.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Serving tool catalog on stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("stdio session closed");
        Ok(())
    }
}
