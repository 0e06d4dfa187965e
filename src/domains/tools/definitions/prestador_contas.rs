//! Campaign finance disclosure lookup for a candidate.
//!
//! The remote path interleaves two fixed `90` segments between the
//! office and candidate codes; they belong to the remote path grammar
//! and are never caller-configurable.

use serde_json::Value;

use super::super::catalog::ToolSpec;
use super::super::schema::{FieldKind, FieldSpec, ValidatedParams};
use super::common::{field, money, pretty};

pub static TOOL: ToolSpec = ToolSpec {
    name: "consultar_prestador_contas",
    description: "Consulta informações sobre prestação de contas de um candidato",
    fields: &[
        FieldSpec {
            name: "eleicao",
            description: "Código da eleição",
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "ano",
            description: "Ano da eleição (ex: 2020)",
            kind: FieldKind::Year,
        },
        FieldSpec {
            name: "municipio",
            description: "Código do município",
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "cargo",
            description: "Código do cargo",
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "candidato",
            description: "Código do candidato",
            kind: FieldKind::Integer,
        },
    ],
    path: build_path,
    render,
};

fn build_path(params: &ValidatedParams) -> String {
    format!(
        "/prestador/consulta/{}/{}/{}/{}/90/90/{}",
        params.number("eleicao"),
        params.number("ano"),
        params.number("municipio"),
        params.number("cargo"),
        params.number("candidato"),
    )
}

fn render(_params: &ValidatedParams, data: &Value) -> String {
    format!(
        "Informações de prestação de contas:\n\n\
         Candidato: {}\n\
         Partido: {} ({})\n\
         CNPJ: {}\n\
         Total Recebido: {}\n\
         Total Despesas: {}\n\n\
         Detalhes completos:\n{}",
        field(data, &["nomeCompleto"]),
        field(data, &["nomePartido"]),
        field(data, &["siglaPartido"]),
        field(data, &["cnpj"]),
        money(data, &["dadosConsolidados", "totalRecebido"]),
        money(data, &["despesas", "totalDespesasPagas"]),
        pretty(data),
    )
}
