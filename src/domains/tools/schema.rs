//! Declarative parameter schemas and validation.
//!
//! Each tool declares its accepted arguments as a flat list of
//! [`FieldSpec`]s. The same declaration drives both the JSON schema
//! advertised to clients ([`input_schema`]) and runtime validation
//! ([`validate`]), so the two can never diverge.
//!
//! Validation is whole-object: every declared field is checked and every
//! failure is collected, so a caller fixing its arguments sees all
//! problems at once. Fields not declared in the schema are ignored.

use chrono::Datelike;
use serde_json::{Map, Value, json};

use super::error::ValidationIssue;

/// Lower bound for election year parameters.
pub const MIN_ELECTION_YEAR: i64 = 2000;

/// Current calendar year, the upper bound for election year parameters.
///
/// Re-evaluated on every call rather than captured at startup: a server
/// running across a year boundary must accept the new year.
pub fn current_year() -> i64 {
    chrono::Local::now().year() as i64
}

/// The kind of a declared parameter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any integer (municipality, election, office and candidate codes).
    Integer,

    /// An election year: integer bounded by [`MIN_ELECTION_YEAR`] and the
    /// current calendar year.
    Year,

    /// A federative unit code: exactly two uppercase ASCII letters.
    Uf,
}

/// Declaration of a single required parameter field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name as it appears in the arguments object.
    pub name: &'static str,

    /// Human-readable description advertised in the tool catalog.
    pub description: &'static str,

    /// Field kind, determining type and bounds.
    pub kind: FieldKind,
}

/// The constraint-checked projection of the caller's arguments.
///
/// Holds only the declared fields; built exclusively by [`validate`],
/// so accessors may assume the declared fields are present and typed.
#[derive(Debug, Clone)]
pub struct ValidatedParams(Map<String, Value>);

impl ValidatedParams {
    /// Read a validated integer field.
    ///
    /// Validation guarantees presence for declared fields; an undeclared
    /// name reads as zero.
    pub fn number(&self, field: &str) -> i64 {
        self.0.get(field).and_then(Value::as_i64).unwrap_or_default()
    }

    /// Read a validated string field.
    pub fn text(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or_default()
    }
}

/// Validate an arguments object against a field declaration list.
///
/// Returns the projection of the declared fields on success, or every
/// offending field with its reason on failure. A non-object arguments
/// value is treated as an empty object, so tools without parameters
/// accept anything and tools with parameters report all fields missing.
pub fn validate(
    fields: &[FieldSpec],
    arguments: &Value,
) -> Result<ValidatedParams, Vec<ValidationIssue>> {
    let empty = Map::new();
    let args = arguments.as_object().unwrap_or(&empty);

    let mut validated = Map::new();
    let mut issues = Vec::new();

    for field in fields {
        let Some(value) = args.get(field.name) else {
            issues.push(ValidationIssue::new(field.name, "campo obrigatório ausente"));
            continue;
        };

        match field.kind {
            FieldKind::Integer => match value.as_i64() {
                Some(_) => {
                    validated.insert(field.name.to_string(), value.clone());
                }
                None => issues.push(ValidationIssue::new(field.name, "deve ser um número inteiro")),
            },
            FieldKind::Year => match value.as_i64() {
                Some(year) => {
                    let max = current_year();
                    if (MIN_ELECTION_YEAR..=max).contains(&year) {
                        validated.insert(field.name.to_string(), value.clone());
                    } else {
                        issues.push(ValidationIssue::new(
                            field.name,
                            format!("deve estar entre {MIN_ELECTION_YEAR} e {max}"),
                        ));
                    }
                }
                None => issues.push(ValidationIssue::new(field.name, "deve ser um número inteiro")),
            },
            FieldKind::Uf => match value.as_str() {
                Some(uf) if uf.len() == 2 && uf.bytes().all(|b| b.is_ascii_uppercase()) => {
                    validated.insert(field.name.to_string(), value.clone());
                }
                Some(_) => issues.push(ValidationIssue::new(
                    field.name,
                    "deve ser uma sigla de UF com duas letras maiúsculas (ex: SP)",
                )),
                None => issues.push(ValidationIssue::new(field.name, "deve ser uma string")),
            },
        }
    }

    if issues.is_empty() {
        Ok(ValidatedParams(validated))
    } else {
        Err(issues)
    }
}

/// Build the JSON input schema advertised for a field declaration list.
///
/// Mirrors [`validate`] exactly: every declared field is required, year
/// fields carry their numeric bounds, UF fields carry their pattern.
pub fn input_schema(fields: &[FieldSpec]) -> Map<String, Value> {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in fields {
        let declaration = match field.kind {
            FieldKind::Integer => json!({
                "type": "number",
                "description": field.description,
            }),
            FieldKind::Year => json!({
                "type": "number",
                "description": field.description,
                "minimum": MIN_ELECTION_YEAR,
                "maximum": current_year(),
            }),
            FieldKind::Uf => json!({
                "type": "string",
                "description": field.description,
                "pattern": "^[A-Z]{2}$",
            }),
        };
        properties.insert(field.name.to_string(), declaration);
        required.push(Value::from(field.name));
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::from("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), Value::Array(required));
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec {
            name: "ano",
            description: "Ano da eleição",
            kind: FieldKind::Year,
        },
        FieldSpec {
            name: "municipio",
            description: "Código do município",
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "uf",
            description: "Sigla da UF",
            kind: FieldKind::Uf,
        },
    ];

    fn valid_args() -> Value {
        json!({ "ano": 2020, "municipio": 35157, "uf": "SP" })
    }

    #[test]
    fn test_valid_arguments_pass() {
        let params = validate(FIELDS, &valid_args()).unwrap();
        assert_eq!(params.number("ano"), 2020);
        assert_eq!(params.number("municipio"), 35157);
        assert_eq!(params.text("uf"), "SP");
    }

    #[test]
    fn test_year_below_minimum_fails() {
        let mut args = valid_args();
        args["ano"] = json!(1999);
        let issues = validate(FIELDS, &args).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "ano");
    }

    #[test]
    fn test_current_year_passes_and_next_year_fails() {
        let mut args = valid_args();
        args["ano"] = json!(current_year());
        assert!(validate(FIELDS, &args).is_ok());

        args["ano"] = json!(current_year() + 1);
        assert!(validate(FIELDS, &args).is_err());
    }

    #[test]
    fn test_all_failures_are_collected() {
        let args = json!({ "ano": 1999, "municipio": "abc", "uf": "sp" });
        let issues = validate(FIELDS, &args).unwrap_err();
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["ano", "municipio", "uf"]);
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let issues = validate(FIELDS, &json!({})).unwrap_err();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.reason.contains("obrigatório")));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut args = valid_args();
        args["desconhecido"] = json!("qualquer coisa");
        assert!(validate(FIELDS, &args).is_ok());
    }

    #[test]
    fn test_float_is_not_an_integer() {
        let mut args = valid_args();
        args["municipio"] = json!(35157.5);
        let issues = validate(FIELDS, &args).unwrap_err();
        assert_eq!(issues[0].field, "municipio");
    }

    #[test]
    fn test_uf_rejects_wrong_length_and_case() {
        for bad in ["S", "SPA", "sp", "s1", ""] {
            let mut args = valid_args();
            args["uf"] = json!(bad);
            assert!(validate(FIELDS, &args).is_err(), "expected {bad:?} to fail");
        }
    }

    #[test]
    fn test_non_object_arguments_behave_as_empty() {
        assert!(validate(FIELDS, &Value::Null).is_err());
        assert!(validate(&[], &Value::Null).is_ok());
    }

    #[test]
    fn test_input_schema_mirrors_declaration() {
        let schema = input_schema(FIELDS);
        assert_eq!(schema["type"], "object");

        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["ano", "municipio", "uf"]);

        let ano = &schema["properties"]["ano"];
        assert_eq!(ano["minimum"], json!(MIN_ELECTION_YEAR));
        assert_eq!(ano["maximum"], json!(current_year()));

        let uf = &schema["properties"]["uf"];
        assert_eq!(uf["pattern"], "^[A-Z]{2}$");
    }
}
