//! Candidate listing for a municipality.
//!
//! Lists every candidacy registered for an election, municipality and
//! office, rendered as a count followed by the full payload.

use serde_json::Value;

use super::super::catalog::ToolSpec;
use super::super::schema::{FieldKind, FieldSpec, ValidatedParams};
use super::common::{list_len, pretty};

pub static TOOL: ToolSpec = ToolSpec {
    name: "listar_candidatos_municipio",
    description: "Lista todos os candidatos para eleições em um município específico",
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
            name: "cargo",
            description: "Código do cargo",
            kind: FieldKind::Integer,
        },
    ],
    path: build_path,
    render,
};

fn build_path(params: &ValidatedParams) -> String {
    format!(
        "/candidatura/listar/{}/{}/{}/{}/candidatos",
        params.number("ano"),
        params.number("municipio"),
        params.number("eleicao"),
        params.number("cargo"),
    )
}

fn render(_params: &ValidatedParams, data: &Value) -> String {
    format!(
        "Candidatos encontrados: {}\n\n{}",
        list_len(data, &["candidatos"]),
        pretty(data),
    )
}

#[cfg(test)]
mod tests {
    use super::super::super::schema::validate;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_order_is_ano_municipio_eleicao_cargo() {
        let params = validate(
            TOOL.fields,
            &json!({ "ano": 2020, "municipio": 35157, "eleicao": 2030402020, "cargo": 11 }),
        )
        .unwrap();
        assert_eq!(
            build_path(&params),
            "/candidatura/listar/2020/35157/2030402020/11/candidatos"
        );
    }

    #[test]
    fn test_render_counts_candidates() {
        let params = validate(
            TOOL.fields,
            &json!({ "ano": 2020, "municipio": 1, "eleicao": 1, "cargo": 1 }),
        )
        .unwrap();
        let data = json!({ "candidatos": [{ "nome": "X" }] });
        let text = render(&params, &data);
        assert!(text.starts_with("Candidatos encontrados: 1\n\n"));
        assert!(text.contains("\"nome\": \"X\""));
    }

    #[test]
    fn test_render_missing_list_counts_zero() {
        let params = validate(
            TOOL.fields,
            &json!({ "ano": 2020, "municipio": 1, "eleicao": 1, "cargo": 1 }),
        )
        .unwrap();
        let text = render(&params, &json!({}));
        assert!(text.starts_with("Candidatos encontrados: 0"));
    }
}
