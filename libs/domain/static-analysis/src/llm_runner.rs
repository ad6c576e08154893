// [libs/domain/static-analysis/src/llm_runner.rs]
//! Runner LLM (opcional): envia la fuente a un proveedor de lenguaje con un
//! prompt orientado a auditoria y valida la respuesta contra el esquema
//! compartido (spec.md 4.2 / 9 "LLM-runner JSON schema"). Una respuesta que
//! no deserializa produce cero Findings, nunca un panico.

use crate::error::RunnerError;
use crate::schema::parse_runner_output;
use async_trait::async_trait;
use hyperforge_domain_models::{ContractSource, Finding};
use tracing::{instrument, warn};

pub const DETECTOR_NAME: &str = "llm-runner";

/// Prompt fijo que describe el esquema de salida esperado (spec.md 9,
/// resuelto: `{"findings":[{"kind","severity","confidence","line","column","evidence"}]}`).
pub const AUDIT_PROMPT_PREAMBLE: &str = concat!(
    "You are a Solidity security auditor. Given the contract source, respond with ONLY a ",
    "JSON object of the shape {\"findings\":[{\"kind\":string,\"severity\":string,",
    "\"confidence\":string,\"line\":number|null,\"column\":number|null,\"evidence\":string|null}]}. ",
    "kind must be one of: reentrancy, integerOverflow, txOrigin, timestampDependence, ",
    "uncheckedCall, suicidal, unsafeDelegatecall, gasLimitLoop, unprotectedWithdrawal, ",
    "frontRunning, other. severity must be one of: info, low, medium, high, critical. ",
    "confidence must be one of: low, medium, high. Emit no prose outside the JSON object."
);

/// Interfaz minima que cualquier proveedor LLM debe satisfacer para
/// alimentar este runner (el proveedor real vive en `hyperforge-llm-client`,
/// tratado como colaborador externo fuera de alcance de este core per
/// spec.md 1).
#[async_trait]
pub trait AuditPromptProvider: Send + Sync {
    async fn complete_audit_prompt(&self, prompt: &str) -> Result<String, RunnerError>;
}

fn build_prompt(source: &ContractSource) -> String {
    format!("{AUDIT_PROMPT_PREAMBLE}\n\n--- CONTRACT SOURCE ---\n{}", source.body)
}

/// Ejecuta el runner LLM sobre `source`. Fallos del proveedor
/// (`ProviderUnavailable`) se propagan como `RunnerError` para que el
/// despachador los registre y degrade a cero Findings sin abortar el resto
/// del fan-out (spec.md 4.2).
#[instrument(skip(source, provider))]
pub async fn run(source: &ContractSource, provider: &dyn AuditPromptProvider) -> Result<Vec<Finding>, RunnerError> {
    let prompt = build_prompt(source);
    let completion = provider.complete_audit_prompt(&prompt).await?;

    match parse_runner_output(DETECTOR_NAME, &completion) {
        Ok(findings) => Ok(findings),
        Err(err) => {
            warn!(%err, "LLM runner output did not match the audit schema, degrading to zero findings");
            Ok(Vec::new())
        }
    }
}
