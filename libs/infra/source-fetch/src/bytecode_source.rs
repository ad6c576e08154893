// [libs/infra/source-fetch/src/bytecode_source.rs]
//! Ultimo recurso: recupera el bytecode desplegado via JSON-RPC `eth_getCode`
//! y lo expone como un `ContractSource` de baja confianza (spec.md 4.1
//! "BytecodeDecompiled"). No decompila realmente a Solidity legible — eso
//! pertenece al compilador/deployer externo fuera de alcance (spec.md 1) —
//! conserva el bytecode crudo como cuerpo, marcado con la procedencia y
//! confianza correctas para que aguas abajo (auditoria) lo trate como tal.

use crate::error::SourceError;
use hyperforge_domain_models::{ContractMetadata, ContractSource, Provenance};
use reqwest::Client;
use serde_json::json;
use tracing::instrument;

#[instrument(skip(client))]
pub async fn fetch_bytecode(client: &Client, rpc_url: &str, address: &str) -> Result<ContractSource, SourceError> {
    let request_body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "eth_getCode",
        "params": [address, "latest"],
    });

    let response: serde_json::Value = client.post(rpc_url).json(&request_body).send().await?.json().await?;

    let bytecode = response
        .get("result")
        .and_then(|v| v.as_str())
        .ok_or_else(|| SourceError::Unavailable(format!("RPC did not return bytecode for {address}")))?;

    if bytecode == "0x" || bytecode.is_empty() {
        return Err(SourceError::Unavailable(format!("{address} has no deployed bytecode")));
    }

    ContractSource::new(
        bytecode.to_string(),
        Provenance::BytecodeDecompiled,
        Some(ContractMetadata { compiler_version: None, contract_name: None, address: Some(address.to_ascii_lowercase()) }),
    )
    .map_err(|e| SourceError::Unavailable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn empty_bytecode_is_reported_as_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": "0x",
            })))
            .mount(&server)
            .await;

        let client = Client::new();
        let result = fetch_bytecode(&client, &server.uri(), "0x00000000000000000000000000000000000bad").await;
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
    }

    #[tokio::test]
    async fn non_empty_bytecode_is_returned_with_bytecode_decompiled_provenance() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": "0x6080604052",
            })))
            .mount(&server)
            .await;

        let client = Client::new();
        let source = fetch_bytecode(&client, &server.uri(), "0x00000000000000000000000000000000000bad").await.unwrap();
        assert_eq!(source.body, "0x6080604052");
        assert_eq!(source.provenance, Provenance::BytecodeDecompiled);
    }
}
