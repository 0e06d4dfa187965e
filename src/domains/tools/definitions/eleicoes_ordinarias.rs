//! Listing of the ordinary elections available for queries.

use serde_json::Value;

use super::super::catalog::ToolSpec;
use super::super::schema::ValidatedParams;
use super::common::{list_len, pretty};

pub static TOOL: ToolSpec = ToolSpec {
    name: "listar_eleicoes_ordinarias",
    description: "Lista todas as eleições ordinárias disponíveis para consulta",
    fields: &[],
    path: build_path,
    render,
};

fn build_path(_params: &ValidatedParams) -> String {
    "/eleicao/ordinarias".to_string()
}

fn render(_params: &ValidatedParams, data: &Value) -> String {
    format!(
        "Eleições ordinárias disponíveis: {}\n\n{}",
        list_len(data, &[]),
        pretty(data),
    )
}
