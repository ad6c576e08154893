// [libs/infra/llm-client/src/provider.rs]
//! Invocacion del proveedor externo con reintento acotado: una respuesta
//! que falla la verificacion de cordura se reintenta una vez con la
//! temperatura subida (spec.md 4.8 "N=2 retries with temperature bumped
//! 0.1 each retry"), luego `LLMMalformed`.

use crate::error::LLMError;
use crate::prompt::{compose_prompt, PromptContext};
use crate::sanitize::{looks_like_solidity, strip_code_fences};
use async_trait::async_trait;
use tracing::{instrument, warn};

pub const MAX_ATTEMPTS: u32 = 2;
const TEMPERATURE_STEP: f64 = 0.1;

/// Interfaz minima que cualquier proveedor de generacion debe satisfacer.
/// La implementacion real (HTTP hacia el proveedor de lenguaje) vive fuera
/// de este core como colaborador externo (spec.md 1).
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, LLMError>;
}

/// Genera codigo fuente a partir del contexto compuesto, reintentando con
/// temperatura incremental si la verificacion de cordura falla.
#[instrument(skip(provider, context), fields(attempts_allowed = MAX_ATTEMPTS))]
pub async fn generate(
    provider: &dyn GenerationProvider,
    context: &PromptContext<'_>,
    base_temperature: f64,
) -> Result<String, LLMError> {
    let prompt = compose_prompt(context);
    let mut last_malformed: Option<String> = None;

    for attempt in 0..MAX_ATTEMPTS {
        let temperature = base_temperature + (attempt as f64) * TEMPERATURE_STEP;
        let raw = provider.complete(&prompt, temperature).await?;

        if raw.trim().is_empty() {
            return Err(LLMError::Unavailable("provider returned an empty response".to_string()));
        }

        let candidate = strip_code_fences(&raw);
        if looks_like_solidity(&candidate) {
            return Ok(candidate);
        }

        warn!(attempt, temperature, "generated output failed the Solidity sanity check, retrying");
        last_malformed = Some(candidate);
    }

    Err(LLMError::Malformed(format!(
        "output failed the Solidity sanity check after {MAX_ATTEMPTS} attempts: {:?}",
        last_malformed.unwrap_or_default()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct ScriptedProvider {
        responses: Vec<&'static str>,
        calls: AtomicU32,
    }

    #[async_trait]
    impl GenerationProvider for ScriptedProvider {
        async fn complete(&self, _prompt: &str, _temperature: f64) -> Result<String, LLMError> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
            Ok(self.responses[index].to_string())
        }
    }

    fn context() -> PromptContext<'static> {
        PromptContext { system_template: "SYSTEM", user_request: "write an ERC20", rag_snippets: &[] }
    }

    #[tokio::test]
    async fn well_formed_first_response_is_returned_immediately() {
        let provider = ScriptedProvider {
            responses: vec!["```solidity\npragma solidity ^0.8.0;\ncontract C {}\n```"],
            calls: AtomicU32::new(0),
        };
        let result = generate(&provider, &context(), 0.2).await.unwrap();
        assert!(result.contains("contract C"));
    }

    #[tokio::test]
    async fn malformed_then_well_formed_succeeds_on_retry() {
        let provider = ScriptedProvider {
            responses: vec!["I refuse.", "pragma solidity ^0.8.0; contract C {}"],
            calls: AtomicU32::new(0),
        };
        let result = generate(&provider, &context(), 0.2).await.unwrap();
        assert!(result.contains("contract C"));
    }

    #[tokio::test]
    async fn malformed_after_all_retries_is_fatal() {
        let provider = ScriptedProvider { responses: vec!["nope", "still nope"], calls: AtomicU32::new(0) };
        let result = generate(&provider, &context(), 0.2).await;
        assert!(matches!(result, Err(LLMError::Malformed(_))));
    }

    #[tokio::test]
    async fn empty_response_is_unavailable_without_retry() {
        let provider = ScriptedProvider { responses: vec![""], calls: AtomicU32::new(0) };
        let result = generate(&provider, &context(), 0.2).await;
        assert!(matches!(result, Err(LLMError::Unavailable(_))));
    }
}
