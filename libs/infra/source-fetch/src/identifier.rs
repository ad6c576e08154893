// [libs/infra/source-fetch/src/identifier.rs]
//! Identificador de entrada del adaptador de origen (spec.md 4.1): un path
//! local, una direccion contra una red, o fuente cruda ya en mano. Los
//! enlaces web del explorer deben reducirse a la direccion de 20 bytes que
//! llevan incrustada (spec.md 4.1 "Edge cases").

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceIdentifier {
    LocalFile(PathBuf),
    Address(String),
    RawSource(String),
}

static EXPLORER_PATH_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:address|token|contract|tx)/(0x[0-9a-f]{40})").unwrap()
});

static BARE_ADDRESS_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(0x[0-9a-f]{40})\s*$").unwrap());

/// Extrae una direccion de 20 bytes desde un enlace web del explorer (o
/// acepta una direccion ya desnuda). Retorna `None` si no hay coincidencia.
pub fn extract_address_from_url_or_literal(input: &str) -> Option<String> {
    EXPLORER_PATH_ADDRESS
        .captures(input)
        .or_else(|| BARE_ADDRESS_TAIL.captures(input))
        .map(|captures| captures[1].to_ascii_lowercase())
}
