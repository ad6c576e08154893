// [apps/cli/src/providers.rs]
//! Adaptadores que cablean el proveedor HTTP concreto de `hyperforge-llm-client`
//! a las interfaces especificas de cada consumidor (generacion vs. runner de
//! auditoria). El orquestador es el unico lugar que conoce ambas caras.

use async_trait::async_trait;
use hyperforge_llm_client::{GenerationProvider, HttpLlmProvider, LLMError};
use hyperforge_static_analysis::{AuditPromptProvider, RunnerError};

/// Temperatura fija usada para prompts de auditoria: no hay reintento con
/// temperatura ajustada en este camino (ese mecanismo es exclusivo de la
/// etapa de generacion, spec.md 4.8).
const AUDIT_PROMPT_TEMPERATURE: f64 = 0.0;

pub struct AuditProviderAdapter(pub HttpLlmProvider);

#[async_trait]
impl AuditPromptProvider for AuditProviderAdapter {
    async fn complete_audit_prompt(&self, prompt: &str) -> Result<String, RunnerError> {
        self.0
            .complete(prompt, AUDIT_PROMPT_TEMPERATURE)
            .await
            .map_err(|err: LLMError| RunnerError::ProviderUnavailable(err.to_string()))
    }
}
