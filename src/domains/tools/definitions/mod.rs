//! Tool definitions module.
//!
//! One file per tool, each exporting a `TOOL: ToolSpec` static with the
//! declared fields, the endpoint path builder and the renderer. The
//! shared rendering helpers live in `common`.

pub mod common;

pub mod anos_eleitorais;
pub mod candidato;
pub mod candidatos_municipio;
pub mod cargos_municipio;
pub mod eleicoes_ordinarias;
pub mod eleicoes_suplementares;
pub mod prestador_contas;
