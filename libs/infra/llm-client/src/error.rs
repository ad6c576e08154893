// [libs/infra/llm-client/src/error.rs]
use thiserror::Error;

/// Fallos de la etapa de generacion LLM (spec.md 4.8 / 7). Ambos son
/// fatales para el workflow: `Generating` transiciona a `Failed`.
#[derive(Error, Debug)]
pub enum LLMError {
    #[error("[LLM_FAULT]: LLMUnavailable -> {0}")]
    Unavailable(String),

    #[error("[LLM_FAULT]: LLMMalformed -> {0}")]
    Malformed(String),
}
