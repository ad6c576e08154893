// [libs/domain/constructor-resolver/src/resolver.rs]
//! Algoritmo completo del resolutor de argumentos de constructor
//! (spec.md 4.4, pasos 1-6).

use crate::abi_extract::{canonical_signature, extract_from_abi, ConstructorParam};
use crate::coerce::coerce;
use crate::error::ResolverError;
use crate::source_extract::extract_from_source;
use hyperforge_domain_models::AbiValue;
use serde_json::Value;
use tracing::instrument;

/// Forma en que el invocador supplied argumentos de constructor.
pub enum SuppliedArguments {
    /// `--args '[...]'`: posicional, debe calzar en aridad con el ABI.
    Positional(Vec<Value>),
    /// `--args '{"name": value, ...}'`: por nombre, se reordena a orden ABI.
    Named(serde_json::Map<String, Value>),
    /// Ningun argumento suministrado; solo los patrones "well-known" de
    /// spec.md 4.4 paso 5 pueden llenar el vacio.
    None,
}

/// Resultado final del resolutor: argumentos tipados en orden ABI mas la
/// firma canonica usada para logging (spec.md 4.4 paso 6).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConstructor {
    pub args: Vec<AbiValue>,
    pub canonical_signature: String,
}

fn arity_and_types_agree(abi_params: &[ConstructorParam], source_params: &[ConstructorParam]) -> bool {
    if abi_params.len() != source_params.len() {
        return false;
    }
    abi_params
        .iter()
        .zip(source_params.iter())
        .all(|(abi, src)| abi.abi_type == src.abi_type)
}

fn well_known_default(param: &ConstructorParam, deployer_address: &str) -> Option<AbiValue> {
    let lower_name = param.name.to_ascii_lowercase();
    match param.abi_type.as_str() {
        "address" if lower_name.contains("owner") => Some(AbiValue::Address(deployer_address.to_ascii_lowercase())),
        t if t.starts_with("uint") || t.starts_with("int") => Some(AbiValue::Uint("0".to_string())),
        "string" => Some(AbiValue::String(String::new())),
        "bool" => Some(AbiValue::Bool(false)),
        _ => None,
    }
}

/// Ejecuta el algoritmo completo: extrae de ABI y fuente, cruza ambas
/// (fatal en discrepancia), resuelve argumentos suministrados/inferidos, y
/// retorna la lista final tipada mas la firma canonica.
#[instrument(skip(abi_json, source_body, supplied, deployer_address))]
pub fn resolve(
    abi_json: &str,
    source_body: &str,
    supplied: SuppliedArguments,
    deployer_address: &str,
) -> Result<ResolvedConstructor, ResolverError> {
    let abi_params = extract_from_abi(abi_json)?;

    // Paso 2: cruce contra la fuente. Una fuente sin constructor explicito
    // (constructor implicito, cero argumentos) es compatible unicamente con
    // un ABI que tampoco declare parametros.
    if let Some(source_params) = extract_from_source(source_body) {
        if !arity_and_types_agree(&abi_params, &source_params) {
            return Err(ResolverError::ConstructorMismatch {
                abi_signature: canonical_signature(&abi_params),
                source_signature: canonical_signature(&source_params),
            });
        }
    } else if !abi_params.is_empty() {
        return Err(ResolverError::ConstructorMismatch {
            abi_signature: canonical_signature(&abi_params),
            source_signature: "constructor()".to_string(),
        });
    }

    let args = match supplied {
        SuppliedArguments::Positional(values) => resolve_positional(&abi_params, values)?,
        SuppliedArguments::Named(map) => resolve_named(&abi_params, map)?,
        SuppliedArguments::None => resolve_defaults(&abi_params, deployer_address)?,
    };

    Ok(ResolvedConstructor { args, canonical_signature: canonical_signature(&abi_params) })
}

fn resolve_positional(abi_params: &[ConstructorParam], values: Vec<Value>) -> Result<Vec<AbiValue>, ResolverError> {
    if values.len() != abi_params.len() {
        return Err(ResolverError::ArgumentCountMismatch { expected: abi_params.len(), got: values.len() });
    }

    abi_params
        .iter()
        .zip(values.iter())
        .map(|(param, value)| coerce(&param.name, &param.abi_type, value))
        .collect()
}

fn resolve_named(
    abi_params: &[ConstructorParam],
    map: serde_json::Map<String, Value>,
) -> Result<Vec<AbiValue>, ResolverError> {
    abi_params
        .iter()
        .map(|param| {
            let value = map
                .get(&param.name)
                .ok_or_else(|| ResolverError::MissingNamedArgument(param.name.clone()))?;
            coerce(&param.name, &param.abi_type, value)
        })
        .collect()
}

fn resolve_defaults(abi_params: &[ConstructorParam], deployer_address: &str) -> Result<Vec<AbiValue>, ResolverError> {
    if abi_params.is_empty() {
        return Ok(Vec::new());
    }

    abi_params
        .iter()
        .map(|param| {
            well_known_default(param, deployer_address)
                .ok_or_else(|| ResolverError::ArgumentsRequired(canonical_signature(abi_params)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ABI: &str = r#"[{"type":"constructor","inputs":[
        {"name":"owner","type":"address"},
        {"name":"supply","type":"uint256"}
    ],"stateMutability":"nonpayable"}]"#;

    const SOURCE: &str = "contract C { constructor(address owner, uint256 supply) {} }";

    #[test]
    fn resolves_positional_arguments_in_order() {
        let args = vec![json!("0x000000000000000000000000000000000000aa"), json!(1000)];
        let resolved = resolve(ABI, SOURCE, SuppliedArguments::Positional(args), "0x0").unwrap();
        assert_eq!(resolved.args.len(), 2);
        assert_eq!(resolved.canonical_signature, "constructor(address,uint256)");
    }

    #[test]
    fn rejects_positional_arity_mismatch() {
        let args = vec![json!("0x000000000000000000000000000000000000aa")];
        let result = resolve(ABI, SOURCE, SuppliedArguments::Positional(args), "0x0");
        assert!(matches!(result, Err(ResolverError::ArgumentCountMismatch { expected: 2, got: 1 })));
    }

    #[test]
    fn rejects_constructor_mismatch_between_abi_and_source() {
        let mismatched_source = "contract C { constructor(address owner) {} }";
        let args = vec![json!("0x000000000000000000000000000000000000aa"), json!(1000)];
        let result = resolve(ABI, mismatched_source, SuppliedArguments::Positional(args), "0x0");
        assert!(matches!(result, Err(ResolverError::ConstructorMismatch { .. })));
    }

    #[test]
    fn named_arguments_are_reordered_to_abi_order() {
        let mut map = serde_json::Map::new();
        map.insert("supply".to_string(), json!(42));
        map.insert("owner".to_string(), json!("0x000000000000000000000000000000000000aa"));
        let resolved = resolve(ABI, SOURCE, SuppliedArguments::Named(map), "0x0").unwrap();
        assert_eq!(resolved.args[0], AbiValue::Address("0x000000000000000000000000000000000000aa".to_string()));
    }

    #[test]
    fn missing_named_argument_is_fatal() {
        let mut map = serde_json::Map::new();
        map.insert("owner".to_string(), json!("0x000000000000000000000000000000000000aa"));
        let result = resolve(ABI, SOURCE, SuppliedArguments::Named(map), "0x0");
        assert!(matches!(result, Err(ResolverError::MissingNamedArgument(name)) if name == "supply"));
    }

    #[test]
    fn no_arguments_applies_well_known_defaults() {
        let resolved = resolve(ABI, SOURCE, SuppliedArguments::None, "0xdeployer").unwrap();
        assert_eq!(resolved.args[0], AbiValue::Address("0xdeployer".to_string()));
        assert_eq!(resolved.args[1], AbiValue::Uint("0".to_string()));
    }

    #[test]
    fn no_arguments_without_well_known_pattern_is_fatal() {
        let abi = r#"[{"type":"constructor","inputs":[{"name":"salt","type":"bytes32"}],"stateMutability":"nonpayable"}]"#;
        let source = "contract C { constructor(bytes32 salt) {} }";
        let result = resolve(abi, source, SuppliedArguments::None, "0xdeployer");
        assert!(matches!(result, Err(ResolverError::ArgumentsRequired(_))));
    }

    #[test]
    fn empty_constructor_with_no_arguments_succeeds() {
        let abi = r#"[{"type":"constructor","inputs":[],"stateMutability":"nonpayable"}]"#;
        let source = "contract C { constructor() {} }";
        let resolved = resolve(abi, source, SuppliedArguments::None, "0xdeployer").unwrap();
        assert!(resolved.args.is_empty());
    }
}
