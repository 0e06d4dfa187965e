//! Tools domain module.
//!
//! Everything this server does lives here: seven read-only query tools
//! over the DivulgaCandContas API, each mapping validated arguments to a
//! GET endpoint and rendering the JSON response as a summary plus the
//! full payload.
//!
//! ## Architecture
//!
//! - `schema.rs` - declarative parameter schemas and validation
//! - `catalog.rs` - the `ToolSpec` strategy triple and the fixed catalog
//! - `definitions/` - one file per tool (path builder + renderer)
//! - `gateway.rs` - the remote query gateway (reqwest)
//! - `registry.rs` - the dispatcher: lookup, validate, fetch, render
//! - `error.rs` - the tool error taxonomy
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a `TOOL: ToolSpec` static
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `CATALOG` in `catalog.rs`
//!
//! Registry and server pick it up from the catalog.

pub mod catalog;
pub mod definitions;
mod error;
mod gateway;
mod registry;
pub mod schema;

pub use catalog::ToolSpec;
pub use error::{ToolError, ValidationIssue};
pub use gateway::{DivulgaApi, HttpGateway};
pub use registry::ToolRegistry;

#[cfg(test)]
pub use gateway::testing;
