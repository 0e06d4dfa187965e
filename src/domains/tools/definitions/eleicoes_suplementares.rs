//! Supplementary elections for a state and year.
//!
//! The only tool whose summary echoes validated parameters (UF and year)
//! rather than response fields alone.

use serde_json::Value;

use super::super::catalog::ToolSpec;
use super::super::schema::{FieldKind, FieldSpec, ValidatedParams};
use super::common::{list_len, pretty};

pub static TOOL: ToolSpec = ToolSpec {
    name: "listar_eleicoes_suplementares",
    description: "Lista eleições suplementares em um estado e ano específicos",
    fields: &[
        FieldSpec {
            name: "ano",
            description: "Ano da eleição (ex: 2020)",
            kind: FieldKind::Year,
        },
        FieldSpec {
            name: "uf",
            description: "Sigla da unidade federativa (ex: SP, RJ)",
            kind: FieldKind::Uf,
        },
    ],
    path: build_path,
    render,
};

fn build_path(params: &ValidatedParams) -> String {
    format!(
        "/eleicao/suplementares/{}/{}",
        params.number("ano"),
        params.text("uf"),
    )
}

fn render(params: &ValidatedParams, data: &Value) -> String {
    format!(
        "Eleições suplementares em {} ({}): {}\n\n{}",
        params.text("uf"),
        params.number("ano"),
        list_len(data, &[]),
        pretty(data),
    )
}
