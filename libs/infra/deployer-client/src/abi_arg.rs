// [libs/infra/deployer-client/src/abi_arg.rs]
//! Serializa un `AbiValue` resuelto a la representacion textual que el
//! subproceso compilador/deployer espera como argumento posicional
//! (spec.md 4.5 paso 2: "constructor args (shell-escaped)"). Como los
//! argumentos se pasan como vector a `tokio::process::Command` (nunca a
//! traves de un shell), no hay superficie de inyeccion que escapar; esta
//! funcion solo produce el token canonico por tipo.

use hyperforge_domain_models::AbiValue;

pub fn abi_value_to_arg(value: &AbiValue) -> String {
    match value {
        AbiValue::Address(address) => address.clone(),
        AbiValue::Uint(raw) => raw.clone(),
        AbiValue::Int(raw) => raw.clone(),
        AbiValue::Bool(flag) => flag.to_string(),
        AbiValue::String(text) => text.clone(),
        AbiValue::Bytes(hex) => hex.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_renders_as_lowercase_literal() {
        assert_eq!(abi_value_to_arg(&AbiValue::Bool(true)), "true");
    }
}
