// [libs/infra/llm-client/src/http_provider.rs]
//! Implementacion concreta de `GenerationProvider` contra un endpoint de
//! chat-completions compatible con OpenAI (el contrato HTTP mas comun entre
//! proveedores de modelos de lenguaje externos). El proveedor real del
//! pipeline vive aqui; los runners de auditoria en `hyperforge-static-analysis`
//! reciben su propia adaptacion de este cliente desde el orquestador
//! (spec.md 1: el modelo de lenguaje es un colaborador externo).

use crate::error::LLMError;
use crate::provider::GenerationProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct HttpLlmProvider {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl HttpLlmProvider {
    pub fn new(client: Client, api_base: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { client, api_base: api_base.into(), api_key: api_key.into(), model: model.into() }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[async_trait]
impl GenerationProvider for HttpLlmProvider {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, LLMError> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let request_body = ChatRequest {
            model: &self.model,
            temperature,
            messages: vec![ChatMessage { role: "user", content: prompt }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LLMError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LLMError::Unavailable(format!("provider returned HTTP {}", response.status())));
        }

        let payload: ChatResponse = response.json().await.map_err(|e| LLMError::Unavailable(e.to_string()))?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LLMError::Unavailable("provider returned no choices".to_string()))
    }
}
