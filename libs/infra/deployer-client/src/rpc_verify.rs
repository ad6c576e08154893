// [libs/infra/deployer-client/src/rpc_verify.rs]
//! Verificacion post-despliegue: confirma via `eth_getCode` que la direccion
//! reportada por el deployer realmente tiene bytecode en cadena (spec.md
//! 4.5 paso 4). Una respuesta "el deployer dijo que si pero la cadena dice
//! que no" es el escenario que `DeploymentUnverified` existe para cubrir.

use crate::error::DeployError;
use reqwest::Client;
use serde_json::json;
use tracing::instrument;

#[instrument(skip(client))]
pub async fn has_deployed_code(client: &Client, rpc_url: &str, address: &str) -> Result<bool, DeployError> {
    let request_body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "eth_getCode",
        "params": [address, "latest"],
    });

    let response: serde_json::Value = client
        .post(rpc_url)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| DeployError::NetworkUnreachable(e.to_string()))?
        .json()
        .await
        .map_err(|e| DeployError::NetworkUnreachable(e.to_string()))?;

    let code = response.get("result").and_then(|v| v.as_str()).unwrap_or("0x");
    Ok(code != "0x" && !code.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn non_empty_bytecode_confirms_deployment() {
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
        let has_code = has_deployed_code(&client, &server.uri(), "0x00000000000000000000000000000000000bad").await.unwrap();
        assert!(has_code);
    }

    #[tokio::test]
    async fn empty_bytecode_reports_no_deployment() {
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
        let has_code = has_deployed_code(&client, &server.uri(), "0x00000000000000000000000000000000000bad").await.unwrap();
        assert!(!has_code);
    }
}
