//! Offices in dispute in a municipality.

use serde_json::Value;

use super::super::catalog::ToolSpec;
use super::super::schema::{FieldKind, FieldSpec, ValidatedParams};
use super::common::{field, list_len, pretty};

pub static TOOL: ToolSpec = ToolSpec {
    name: "listar_cargos_municipio",
    description: "Lista os cargos em disputa em um município específico",
    fields: &[
        FieldSpec {
            name: "eleicao",
            description: "Código da eleição",
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "municipio",
            description: "Código do município",
            kind: FieldKind::Integer,
        },
    ],
    path: build_path,
    render,
};

fn build_path(params: &ValidatedParams) -> String {
    format!(
        "/eleicao/listar/municipios/{}/{}/cargos",
        params.number("eleicao"),
        params.number("municipio"),
    )
}

fn render(_params: &ValidatedParams, data: &Value) -> String {
    format!(
        "Cargos em disputa no município:\n\n\
         Município: {}\n\
         UF: {}\n\
         Cargos disponíveis: {}\n\n{}",
        field(data, &["unidadeEleitoralDTO", "nome"]),
        field(data, &["unidadeEleitoralDTO", "sigla"]),
        list_len(data, &["cargos"]),
        pretty(data),
    )
}
