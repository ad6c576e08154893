// [libs/infra/explorer-client/src/submit.rs]
//! Sumision multipart de fuente y metadatos al block-explorer (spec.md 4.6
//! paso 1), devolviendo el GUID de verificacion asignado.

use crate::error::VerifyError;
use reqwest::multipart::Form;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

pub struct SubmissionRequest {
    pub address: String,
    pub source_body: String,
    pub compiler_version: String,
    pub optimization_used: bool,
    pub constructor_arguments_abi_encoded: String,
}

#[derive(Deserialize)]
struct SubmissionResponse {
    guid: String,
}

#[instrument(skip(client, request), fields(address = %request.address))]
pub async fn submit(client: &Client, base_url: &str, api_key: Option<&str>, request: &SubmissionRequest) -> Result<String, VerifyError> {
    let url = format!("{}/api/v2/smart-contracts/verification/source", base_url.trim_end_matches('/'));

    let mut form = Form::new()
        .text("address", request.address.clone())
        .text("sourceCode", request.source_body.clone())
        .text("compilerVersion", request.compiler_version.clone())
        .text("optimizationUsed", if request.optimization_used { "1" } else { "0" })
        .text("constructorArguments", request.constructor_arguments_abi_encoded.clone());

    if let Some(key) = api_key {
        form = form.text("apikey", key.to_string());
    }

    let response = client.post(&url).multipart(form).send().await?;

    if !response.status().is_success() {
        return Err(VerifyError::SubmissionRejected(format!("explorer returned HTTP {}", response.status())));
    }

    let payload: SubmissionResponse = response.json().await?;
    Ok(payload.guid)
}
