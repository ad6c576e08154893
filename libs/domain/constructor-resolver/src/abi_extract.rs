// [libs/domain/constructor-resolver/src/abi_extract.rs]
//! Extraccion del parametro de constructor desde el ABI compilado
//! (spec.md 4.4 paso 1).

use crate::error::ResolverError;
use alloy_json_abi::JsonAbi;

/// Un parametro de constructor tal como el ABI lo declara.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorParam {
    pub name: String,
    pub abi_type: String,
}

/// Extrae la lista ordenada de parametros del constructor desde el JSON del
/// ABI. Un contrato sin constructor explicito produce una lista vacia
/// (constructor implicito, sin argumentos).
pub fn extract_from_abi(abi_json: &str) -> Result<Vec<ConstructorParam>, ResolverError> {
    let abi: JsonAbi = serde_json::from_str(abi_json).map_err(|e| ResolverError::InvalidAbi(e.to_string()))?;

    let Some(constructor) = abi.constructor.as_ref() else {
        return Ok(Vec::new());
    };

    Ok(constructor
        .inputs
        .iter()
        .map(|param| ConstructorParam {
            name: param.name.clone(),
            abi_type: param.ty.clone(),
        })
        .collect())
}

/// Firma canonica `constructor(type1,type2,...)` usada en logs y mensajes
/// de error de discrepancia (spec.md 4.4 paso 6).
pub fn canonical_signature(params: &[ConstructorParam]) -> String {
    let types: Vec<&str> = params.iter().map(|p| p.abi_type.as_str()).collect();
    format!("constructor({})", types.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_constructor_params_in_order() {
        let abi = r#"[{"type":"constructor","inputs":[
            {"name":"owner","type":"address"},
            {"name":"supply","type":"uint256"}
        ],"stateMutability":"nonpayable"}]"#;
        let params = extract_from_abi(abi).unwrap();
        assert_eq!(params, vec![
            ConstructorParam { name: "owner".to_string(), abi_type: "address".to_string() },
            ConstructorParam { name: "supply".to_string(), abi_type: "uint256".to_string() },
        ]);
    }

    #[test]
    fn abi_without_constructor_yields_empty_params() {
        let abi = r#"[{"type":"function","name":"foo","inputs":[],"outputs":[],"stateMutability":"view"}]"#;
        let params = extract_from_abi(abi).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn malformed_abi_is_reported() {
        let result = extract_from_abi("not json");
        assert!(result.is_err());
    }

    #[test]
    fn canonical_signature_joins_types() {
        let params = vec![
            ConstructorParam { name: "owner".to_string(), abi_type: "address".to_string() },
            ConstructorParam { name: "supply".to_string(), abi_type: "uint256".to_string() },
        ];
        assert_eq!(canonical_signature(&params), "constructor(address,uint256)");
    }
}
