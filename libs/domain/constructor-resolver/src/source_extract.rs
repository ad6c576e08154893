// [libs/domain/constructor-resolver/src/source_extract.rs]
//! Extraccion independiente de la firma del constructor desde el codigo
//! fuente Solidity, usada como cross-check contra el ABI (spec.md 4.4
//! paso 2). Una discrepancia de aridad o tipos entre ambas extracciones
//! es siempre fatal (`ConstructorMismatch`).

use crate::abi_extract::ConstructorParam;
use once_cell::sync::Lazy;
use regex::Regex;

static CONSTRUCTOR_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"constructor\s*\(([^)]*)\)").unwrap());

/// Busca la primera declaracion `constructor(...)` en `source` y extrae sus
/// parametros. `None` si la fuente no declara un constructor explicito.
pub fn extract_from_source(source: &str) -> Option<Vec<ConstructorParam>> {
    let captures = CONSTRUCTOR_SIGNATURE.captures(source)?;
    let raw_params = captures.get(1)?.as_str().trim();

    if raw_params.is_empty() {
        return Some(Vec::new());
    }

    Some(
        raw_params
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(parse_param)
            .collect(),
    )
}

/// Parsea un segmento `<type> [visibility] <name>` tal como aparece dentro
/// de la lista de parametros del constructor. El tipo es siempre el primer
/// token; el ultimo token se toma como nombre (los calificadores de
/// ubicacion/visibilidad intermedios, p.ej. `memory`, se descartan).
fn parse_param(segment: &str) -> ConstructorParam {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    let abi_type = tokens.first().copied().unwrap_or("unknown").to_string();
    let name = tokens.last().copied().unwrap_or("").to_string();
    ConstructorParam { name, abi_type }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_simple_constructor_params() {
        let source = "contract C { constructor(address owner, uint256 supply) { owner_ = owner; } }";
        let params = extract_from_source(source).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].abi_type, "address");
        assert_eq!(params[0].name, "owner");
        assert_eq!(params[1].abi_type, "uint256");
    }

    #[test]
    fn no_constructor_returns_none() {
        let source = "contract C { uint256 public x; }";
        assert!(extract_from_source(source).is_none());
    }

    #[test]
    fn empty_constructor_yields_empty_params() {
        let source = "contract C { constructor() {} }";
        let params = extract_from_source(source).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn tolerates_memory_and_calldata_qualifiers() {
        let source = "contract C { constructor(string memory name_, bytes calldata data_) {} }";
        let params = extract_from_source(source).unwrap();
        assert_eq!(params[0].abi_type, "string");
        assert_eq!(params[0].name, "name_");
        assert_eq!(params[1].abi_type, "bytes");
    }
}
