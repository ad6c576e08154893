// [libs/infra/llm-client/src/sanitize.rs]
//! Saneamiento de la respuesta cruda del modelo: despoja fences de codigo y
//! aplica la verificacion ligera de cordura Solidity (spec.md 4.8: "must
//! contain `pragma solidity` and a `contract` keyword").

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```[a-zA-Z]*\n?(.*?)```").unwrap());

/// Extrae el primer bloque de codigo si la respuesta trae fences markdown;
/// de lo contrario retorna la respuesta completa recortada.
pub fn strip_code_fences(raw: &str) -> String {
    if let Some(captures) = CODE_FENCE.captures(raw) {
        return captures[1].trim().to_string();
    }
    raw.trim().to_string()
}

/// Verificacion ligera de cordura: el cuerpo debe contener un pragma y una
/// declaracion de contrato. No es un parser de Solidity; solo descarta
/// respuestas evidentemente no-Solidity o truncadas.
pub fn looks_like_solidity(body: &str) -> bool {
    body.contains("pragma solidity") && body.contains("contract")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markdown_fence() {
        let raw = "Here you go:\n```solidity\npragma solidity ^0.8.0;\ncontract C {}\n```\n";
        let stripped = strip_code_fences(raw);
        assert_eq!(stripped, "pragma solidity ^0.8.0;\ncontract C {}");
    }

    #[test]
    fn passes_through_when_no_fence_present() {
        let raw = "pragma solidity ^0.8.0; contract C {}";
        assert_eq!(strip_code_fences(raw), raw);
    }

    #[test]
    fn sanity_check_rejects_non_solidity() {
        assert!(!looks_like_solidity("I cannot help with that request."));
    }

    #[test]
    fn sanity_check_accepts_well_formed_contract() {
        assert!(looks_like_solidity("pragma solidity ^0.8.0; contract Token {}"));
    }
}
