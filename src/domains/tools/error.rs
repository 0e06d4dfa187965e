//! Tool-specific error types.
//!
//! The taxonomy mirrors what a caller can act on: fix its arguments
//! (`Validation`), accept that the remote has no data (`NotFound`),
//! retry later at its own layer (`Remote`, `Transport`) or fix the tool
//! name (`UnknownTool`). Nothing is retried or wrapped internally.

use thiserror::Error;

/// One offending field from whole-object parameter validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path of the offending field in the arguments object.
    pub field: String,

    /// Human-readable reason the field was rejected.
    pub reason: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Errors that can occur during a tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The caller's arguments failed validation; lists every offending
    /// field joined by a fixed separator.
    #[error("Parâmetros inválidos: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// The remote API returned 404 for the resolved resource.
    #[error("Dados não encontrados para os parâmetros informados")]
    NotFound,

    /// The remote API returned a non-2xx, non-404 status.
    #[error("Erro na API: {status} - {status_text}")]
    Remote { status: u16, status_text: String },

    /// Network-level failure: DNS, timeout, connection reset, or an
    /// unreadable response body.
    #[error("Erro inesperado: {0}")]
    Transport(String),

    /// The invocation named a tool outside the catalog.
    #[error("Tool desconhecida: {0}")]
    UnknownTool(String),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
