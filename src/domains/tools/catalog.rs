//! The tool catalog: one [`ToolSpec`] per tool, in a fixed order.
//!
//! A `ToolSpec` bundles everything the dispatcher needs for one tool:
//! the declared parameter fields, the endpoint path builder and the
//! response renderer. Adding a tool means adding a definition file and
//! one entry to [`CATALOG`]; registry and server both derive from it.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;

use super::definitions;
use super::schema::{self, FieldSpec, ValidatedParams};

/// Definition of one tool: schema, endpoint resolver and renderer.
pub struct ToolSpec {
    /// Unique, stable tool name as advertised to clients.
    pub name: &'static str,

    /// Tool description shown to clients.
    pub description: &'static str,

    /// Declared parameter fields; all required, extras ignored.
    pub fields: &'static [FieldSpec],

    /// Pure mapping from validated parameters to the remote resource path.
    pub path: fn(&ValidatedParams) -> String,

    /// Pure rendering of the decoded response body into the result text.
    pub render: fn(&ValidatedParams, &Value) -> String,
}

impl ToolSpec {
    /// Build the rmcp Tool model (metadata) for this definition.
    ///
    /// The input schema is generated from the same field declarations
    /// used for runtime validation, and year bounds are computed here,
    /// at build time. Callers advertising the catalog must build the
    /// models per request, never cache them across calls.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(schema::input_schema(self.fields)),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// The complete, ordered catalog of tools exposed by this server.
pub static CATALOG: [&ToolSpec; 7] = [
    &definitions::candidatos_municipio::TOOL,
    &definitions::candidato::TOOL,
    &definitions::anos_eleitorais::TOOL,
    &definitions::cargos_municipio::TOOL,
    &definitions::eleicoes_ordinarias::TOOL,
    &definitions::eleicoes_suplementares::TOOL,
    &definitions::prestador_contas::TOOL,
];

/// Look up a tool definition by name.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    CATALOG.iter().copied().find(|tool| tool.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_unique_tools() {
        let mut names: Vec<_> = CATALOG.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 7);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_catalog_names() {
        let names: Vec<_> = CATALOG.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "listar_candidatos_municipio",
                "consultar_candidato",
                "listar_anos_eleitorais",
                "listar_cargos_municipio",
                "listar_eleicoes_ordinarias",
                "listar_eleicoes_suplementares",
                "consultar_prestador_contas",
            ]
        );
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("consultar_candidato").is_some());
        assert!(find("nao_existe").is_none());
    }

    #[test]
    fn test_to_tool_requires_every_declared_field() {
        for spec in CATALOG {
            let tool = spec.to_tool();
            let required = tool.input_schema["required"].as_array().unwrap();
            assert_eq!(required.len(), spec.fields.len(), "tool {}", spec.name);
            for field in spec.fields {
                assert!(
                    required.iter().any(|v| v == field.name),
                    "tool {} missing required field {}",
                    spec.name,
                    field.name
                );
            }
        }
    }
}
