//! Listing of the electoral years available in the remote system.
//!
//! Takes no parameters; the remote returns a bare array of years and the
//! result is a single summary line with no payload dump.

use serde_json::Value;

use super::super::catalog::ToolSpec;
use super::super::schema::ValidatedParams;
use super::common::join_items;

pub static TOOL: ToolSpec = ToolSpec {
    name: "listar_anos_eleitorais",
    description: "Lista todos os anos eleitorais disponíveis no sistema",
    fields: &[],
    path: build_path,
    render,
};

fn build_path(_params: &ValidatedParams) -> String {
    "/eleicao/anos-eleitorais".to_string()
}

fn render(_params: &ValidatedParams, data: &Value) -> String {
    format!("Anos eleitorais disponíveis: {}", join_items(data))
}
