//! Transport layer for the MCP server.
//!
//! Only the standard MCP stdio transport is provided: the server is
//! driven by an outer agent process over stdin/stdout, and logs go to
//! stderr.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
