// [libs/infra/source-fetch/src/explorer_source.rs]
//! Recuperacion de fuente verificada desde el block-explorer primario o
//! desde Sourcify como registro secundario (spec.md 4.1 "ExplorerVerified"
//! / "SourcifyVerified").

use crate::error::SourceError;
use crate::retry::{with_retry, Attempt};
use hyperforge_domain_models::{ContractMetadata, ContractSource, Provenance};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
struct ExplorerSourceResponse {
    source_code: Option<String>,
    contract_name: Option<String>,
    compiler_version: Option<String>,
}

/// Consulta el endpoint de fuente verificada del explorer primario para
/// `address`. Retorna `Ok(None)` cuando el explorer responde pero no tiene
/// fuente verificada (el llamador debe seguir con Sourcify).
#[instrument(skip(client, api_key))]
pub async fn fetch_explorer_verified(
    client: &Client,
    base_url: &str,
    api_key: Option<&str>,
    address: &str,
) -> Result<Option<ContractSource>, SourceError> {
    let url = format!("{}/api/v2/smart-contracts/{address}", base_url.trim_end_matches('/'));

    let response = with_retry(|| async {
        let mut request = client.get(&url);
        if let Some(key) = api_key {
            request = request.query(&[("apikey", key)]);
        }

        match request.send().await {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                Err(Attempt::Terminal(SourceError::Unavailable(format!("{address} not found on explorer"))))
            }
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(Attempt::Transient(SourceError::Unavailable(format!(
                "explorer returned HTTP {}",
                response.status()
            )))),
            Err(network_error) => Err(Attempt::Transient(SourceError::Network(network_error))),
        }
    })
    .await?;

    let payload: ExplorerSourceResponse = response.json().await?;

    let Some(source_code) = payload.source_code.filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };

    let source = ContractSource::new(
        source_code,
        Provenance::ExplorerVerified,
        Some(ContractMetadata {
            compiler_version: payload.compiler_version,
            contract_name: payload.contract_name,
            address: Some(address.to_ascii_lowercase()),
        }),
    )
    .map_err(|e| SourceError::Unavailable(e.to_string()))?;

    Ok(Some(source))
}

/// Consulta Sourcify como registro secundario, siguiendo el mismo contrato
/// de retorno que `fetch_explorer_verified`.
#[instrument(skip(client))]
pub async fn fetch_sourcify_verified(
    client: &Client,
    base_url: &str,
    chain_id: u64,
    address: &str,
) -> Result<Option<ContractSource>, SourceError> {
    let url = format!("{}/files/any/{chain_id}/{address}", base_url.trim_end_matches('/'));

    let response = with_retry(|| async {
        match client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                Err(Attempt::Terminal(SourceError::Unavailable(format!("{address} not found on Sourcify"))))
            }
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(Attempt::Transient(SourceError::Unavailable(format!(
                "Sourcify returned HTTP {}",
                response.status()
            )))),
            Err(network_error) => Err(Attempt::Transient(SourceError::Network(network_error))),
        }
    })
    .await?;

    #[derive(Deserialize)]
    struct SourcifyFile {
        name: String,
        content: String,
    }

    let files: Vec<SourcifyFile> = response.json().await?;
    let Some(solidity_file) = files.into_iter().find(|f| f.name.ends_with(".sol")) else {
        return Ok(None);
    };

    let source = ContractSource::new(
        solidity_file.content,
        Provenance::SourcifyVerified,
        Some(ContractMetadata { compiler_version: None, contract_name: None, address: Some(address.to_ascii_lowercase()) }),
    )
    .map_err(|e| SourceError::Unavailable(e.to_string()))?;

    Ok(Some(source))
}
