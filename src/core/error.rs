//! Error types and handling for the MCP server.
//!
//! Covers server construction only. Tool invocation failures never
//! surface here: the dispatcher reports them per call as `ToolError`
//! results, and the transport layer has its own error type.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure building the HTTP client for the remote API.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
