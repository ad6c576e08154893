// [libs/domain/constructor-resolver/src/coerce.rs]
//! Coercion de un valor JSON de usuario al `AbiValue` tipado declarado por
//! el ABI (spec.md 4.4 paso 3): address debe ser hex de 20 bytes, uint/int
//! deben caber en el ancho declarado, string/bytes pasan sin modificar,
//! bool acepta literal `true`/`false`.

use crate::error::ResolverError;
use alloy_primitives::{Address, I256, U256};
use hyperforge_domain_models::AbiValue;
use serde_json::Value;
use std::str::FromStr;

fn type_error(name: &str, declared_type: &str, value: &Value) -> ResolverError {
    ResolverError::ArgumentTypeError {
        name: name.to_string(),
        declared_type: declared_type.to_string(),
        supplied_value: value.to_string(),
    }
}

/// Verifica que `raw` (decimal o 0x-hex) represente un entero que cabe en
/// `bits` de ancho, usando aritmetica de 256 bits exacta (spec.md 4.4 paso
/// 3: "uint/int must fit width").
fn fits_unsigned_width(raw: &str, bits: u32) -> bool {
    let Ok(value) = U256::from_str(raw) else { return false };
    if bits >= 256 {
        return true;
    }
    let max_exclusive = U256::from(1u8) << bits;
    value < max_exclusive
}

/// Equivalente con signo de `fits_unsigned_width` (spec.md 4.4 paso 3:
/// "uint/int must fit width"), con rango `[-2^(bits-1), 2^(bits-1) - 1]`.
fn fits_signed_width(raw: &str, bits: u32) -> bool {
    let Ok(value) = I256::from_str(raw) else { return false };
    if bits >= 256 {
        return true;
    }
    let magnitude = U256::from(1u8) << (bits - 1);
    let upper = I256::from_str(&magnitude.to_string()).expect("2^(bits-1) fits I256 for bits < 256");
    let lower = I256::from_str(&format!("-{magnitude}")).expect("-2^(bits-1) fits I256 for bits < 256");
    value >= lower && value < upper
}

/// Coerce un valor JSON al `AbiValue` declarado por `abi_type`, validando su
/// forma. `name` se usa unicamente para el mensaje de error.
pub fn coerce(name: &str, abi_type: &str, value: &Value) -> Result<AbiValue, ResolverError> {
    if abi_type == "address" {
        let raw = value.as_str().ok_or_else(|| type_error(name, abi_type, value))?;
        Address::from_str(raw).map_err(|_| type_error(name, abi_type, value))?;
        return Ok(AbiValue::Address(raw.to_ascii_lowercase()));
    }

    if let Some(stripped) = abi_type.strip_prefix("uint") {
        let bits = if stripped.is_empty() { 256 } else { stripped.parse::<u32>().unwrap_or(256) };
        let raw = json_number_or_string(value).ok_or_else(|| type_error(name, abi_type, value))?;
        if !fits_unsigned_width(&raw, bits) {
            return Err(type_error(name, abi_type, value));
        }
        return Ok(AbiValue::Uint(raw));
    }

    if let Some(stripped) = abi_type.strip_prefix("int") {
        let bits = if stripped.is_empty() { 256 } else { stripped.parse::<u32>().unwrap_or(256) };
        let raw = json_number_or_string(value).ok_or_else(|| type_error(name, abi_type, value))?;
        if !fits_signed_width(&raw, bits) {
            return Err(type_error(name, abi_type, value));
        }
        return Ok(AbiValue::Int(raw));
    }

    if abi_type == "bool" {
        let raw = value.as_bool().ok_or_else(|| type_error(name, abi_type, value))?;
        return Ok(AbiValue::Bool(raw));
    }

    if abi_type == "string" {
        let raw = value.as_str().ok_or_else(|| type_error(name, abi_type, value))?;
        return Ok(AbiValue::String(raw.to_string()));
    }

    if abi_type.starts_with("bytes") {
        let raw = value.as_str().ok_or_else(|| type_error(name, abi_type, value))?;
        return Ok(AbiValue::Bytes(raw.to_string()));
    }

    Err(ResolverError::ArgumentTypeError {
        name: name.to_string(),
        declared_type: abi_type.to_string(),
        supplied_value: "unsupported ABI type (arrays/tuples are out of scope)".to_string(),
    })
}

fn json_number_or_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_valid_address() {
        let value = json!("0x000000000000000000000000000000000000aa");
        let coerced = coerce("owner", "address", &value).unwrap();
        assert_eq!(coerced, AbiValue::Address("0x000000000000000000000000000000000000aa".to_string()));
    }

    #[test]
    fn rejects_malformed_address() {
        let value = json!("not-an-address");
        assert!(coerce("owner", "address", &value).is_err());
    }

    #[test]
    fn coerces_uint_from_number_or_string() {
        assert!(coerce("supply", "uint256", &json!(1000)).is_ok());
        assert!(coerce("supply", "uint8", &json!("200")).is_ok());
    }

    #[test]
    fn coerces_bool_and_string() {
        assert_eq!(coerce("flag", "bool", &json!(true)).unwrap(), AbiValue::Bool(true));
        assert_eq!(coerce("label", "string", &json!("hi")).unwrap(), AbiValue::String("hi".to_string()));
    }

    #[test]
    fn rejects_non_numeric_uint() {
        assert!(coerce("supply", "uint256", &json!("not-a-number")).is_err());
    }

    #[test]
    fn coerces_int_from_number_or_string() {
        assert!(coerce("delta", "int256", &json!(-1000)).is_ok());
        assert!(coerce("delta", "int8", &json!("-100")).is_ok());
    }

    #[test]
    fn rejects_non_numeric_int() {
        assert!(coerce("delta", "int256", &json!("not-a-number")).is_err());
    }

    #[test]
    fn rejects_int_outside_declared_width() {
        assert!(coerce("delta", "int8", &json!("99999999999999")).is_err());
        assert!(coerce("delta", "int8", &json!(-129)).is_err());
        assert!(coerce("delta", "int8", &json!(127)).is_ok());
        assert!(coerce("delta", "int8", &json!(-128)).is_ok());
    }
}
