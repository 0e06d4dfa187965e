//! DivulgaCandContas MCP Server Library
//!
//! This crate exposes a fixed catalog of read-only query tools over the
//! TSE DivulgaCandContas REST API (Brazilian electoral disclosure data)
//! through the Model Context Protocol.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and
//!   the stdio transport
//! - **domains::tools**: the tool catalog — parameter schemas, endpoint
//!   resolution, the remote query gateway, response rendering and the
//!   dispatcher that ties them together
//!
//! # Example
//!
//! ```rust,no_run
//! use divulgacandcontas_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
