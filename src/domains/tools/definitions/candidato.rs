//! Detailed lookup of a single candidate.
//!
//! Summarizes name, ballot number, party, office and registration
//! status, then appends the full payload.

use serde_json::Value;

use super::super::catalog::ToolSpec;
use super::super::schema::{FieldKind, FieldSpec, ValidatedParams};
use super::common::{field, first_field, pretty};

pub static TOOL: ToolSpec = ToolSpec {
    name: "consultar_candidato",
    description: "Consulta informações detalhadas sobre um candidato específico",
    fields: &[
        FieldSpec {
            name: "ano",
            description: "Ano da eleição (ex: 2020)",
            kind: FieldKind::Year,
        },
        FieldSpec {
            name: "municipio",
            description: "Código do município (ex: 35157 para São Paulo)",
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "eleicao",
            description: "Código da eleição (ex: 2030402020 para eleições municipais de 2020)",
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
        "/candidatura/buscar/{}/{}/{}/candidato/{}",
        params.number("ano"),
        params.number("municipio"),
        params.number("eleicao"),
        params.number("candidato"),
    )
}

fn render(_params: &ValidatedParams, data: &Value) -> String {
    format!(
        "Informações do candidato:\n\n\
         Nome: {}\n\
         Número: {}\n\
         Partido: {} ({})\n\
         Cargo: {}\n\
         Situação: {}\n\n\
         Detalhes completos:\n{}",
        first_field(data, &[&["nomeCompleto"], &["nomeUrna"]]),
        field(data, &["numero"]),
        field(data, &["partido", "nome"]),
        field(data, &["partido", "sigla"]),
        field(data, &["cargo", "nome"]),
        field(data, &["descricaoSituacao"]),
        pretty(data),
    )
}

#[cfg(test)]
mod tests {
    use super::super::super::schema::validate;
    use super::*;
    use serde_json::json;

    fn params() -> ValidatedParams {
        validate(
            TOOL.fields,
            &json!({ "ano": 2020, "municipio": 35157, "eleicao": 2030402020, "candidato": 98765 }),
        )
        .unwrap()
    }

    #[test]
    fn test_path_embeds_candidato_segment_last() {
        assert_eq!(
            build_path(&params()),
            "/candidatura/buscar/2020/35157/2030402020/candidato/98765"
        );
    }

    #[test]
    fn test_render_full_payload() {
        let data = json!({
            "nomeCompleto": "Maria da Silva",
            "numero": 13,
            "partido": { "nome": "Partido Exemplo", "sigla": "PE" },
            "cargo": { "nome": "Prefeito" },
            "descricaoSituacao": "Deferido"
        });
        let text = render(&params(), &data);
        assert!(text.contains("Nome: Maria da Silva"));
        assert!(text.contains("Número: 13"));
        assert!(text.contains("Partido: Partido Exemplo (PE)"));
        assert!(text.contains("Cargo: Prefeito"));
        assert!(text.contains("Situação: Deferido"));
        assert!(text.contains("Detalhes completos:\n{"));
    }

    #[test]
    fn test_render_falls_back_to_ballot_name() {
        let data = json!({ "nomeUrna": "Maria" });
        let text = render(&params(), &data);
        assert!(text.contains("Nome: Maria"));
        assert!(text.contains("Número: N/A"));
        assert!(text.contains("Partido: N/A (N/A)"));
    }
}
