// [apps/cli/src/abi_encode.rs]
//! Codificacion ABI de los argumentos de constructor resueltos, para el
//! campo `constructorArguments` del contrato HTTP del explorer (spec.md 6
//! "Explorer HTTP contract").

use crate::error::CliError;
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, I256, U256};
use hyperforge_domain_models::AbiValue;
use std::str::FromStr;

fn to_dyn_sol_value(value: &AbiValue) -> Result<DynSolValue, CliError> {
    match value {
        AbiValue::Address(address) => Address::from_str(address)
            .map(DynSolValue::Address)
            .map_err(|e| CliError::InvalidInput(format!("invalid address `{address}`: {e}"))),
        AbiValue::Uint(raw) => U256::from_str(raw)
            .map(|v| DynSolValue::Uint(v, 256))
            .map_err(|e| CliError::InvalidInput(format!("invalid uint `{raw}`: {e}"))),
        AbiValue::Int(raw) => I256::from_str(raw)
            .map(|v| DynSolValue::Int(v, 256))
            .map_err(|e| CliError::InvalidInput(format!("invalid int `{raw}`: {e}"))),
        AbiValue::Bool(flag) => Ok(DynSolValue::Bool(*flag)),
        AbiValue::String(text) => Ok(DynSolValue::String(text.clone())),
        AbiValue::Bytes(hex_body) => hex::decode(hex_body.trim_start_matches("0x"))
            .map(DynSolValue::Bytes)
            .map_err(|e| CliError::InvalidInput(format!("invalid bytes `{hex_body}`: {e}"))),
    }
}

/// Codifica la lista de argumentos como un unico blob de parametros ABI
/// (sin selector de funcion), tal como lo espera el endpoint de
/// verificacion de un block-explorer.
pub fn encode_constructor_args(args: &[AbiValue]) -> Result<String, CliError> {
    if args.is_empty() {
        return Ok(String::new());
    }

    let values = args.iter().map(to_dyn_sol_value).collect::<Result<Vec<_>, _>>()?;
    let encoded = DynSolValue::Tuple(values).abi_encode_params();
    Ok(hex::encode(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_encode_to_empty_string() {
        assert_eq!(encode_constructor_args(&[]).unwrap(), "");
    }

    #[test]
    fn encodes_address_and_uint_pair() {
        let args = vec![
            AbiValue::Address("0x000000000000000000000000000000000000aa".to_string()),
            AbiValue::Uint("1000".to_string()),
        ];
        let encoded = encode_constructor_args(&args).unwrap();
        assert_eq!(encoded.len(), 128);
    }
}
