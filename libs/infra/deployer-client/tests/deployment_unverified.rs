// [libs/infra/deployer-client/tests/deployment_unverified.rs]
//! A deployer subprocess that reports a successful deployment is never
//! trusted on its word alone: when the chain's own `eth_getCode` disagrees,
//! the pipeline must surface `DeploymentUnverified`, not a `DeploymentRecord`.

use hyperforge_deployer_client::{deploy, DeployError, DeployRequest};
use hyperforge_domain_models::{NetworkConfig, RunId};
use std::os::unix::fs::PermissionsExt;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPORTED_ADDRESS: &str = "0x00000000000000000000000000000000000bad";
const REPORTED_TX_HASH_SUFFIX: &str = "ab";

async fn write_fixture_deployer(dir: &std::path::Path) -> String {
    let tx_hash = format!("0x{}", REPORTED_TX_HASH_SUFFIX.repeat(32));
    let script = format!(
        "#!/bin/sh\ncat <<EOF\n{{\"tx\":\"{tx_hash}\",\"address\":\"{REPORTED_ADDRESS}\",\"gasUsed\":21000,\"block\":1}}\nEOF\n"
    );
    let path = dir.join("fake-deployer.sh");
    tokio::fs::write(&path, script).await.unwrap();
    let mut perms = tokio::fs::metadata(&path).await.unwrap().permissions();
    perms.set_mode(0o755);
    tokio::fs::set_permissions(&path, perms).await.unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn chain_disagreeing_with_deployer_is_surfaced_as_unverified() {
    let rpc_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x",
        })))
        .mount(&rpc_server)
        .await;

    let workdir = tempfile::tempdir().unwrap();
    let deployer_binary = write_fixture_deployer(workdir.path()).await;
    let build_dir = workdir.path().join("build").to_string_lossy().into_owned();

    let request = DeployRequest {
        deployer_binary,
        build_artifacts_dir: build_dir,
        run_id: RunId::from("fixed-run-id".to_string()),
        source_body: "pragma solidity ^0.8.0; contract C {}".to_string(),
        constructor_args: vec![],
        network: NetworkConfig::new(31337, rpc_server.uri(), "hyperion-test"),
        deployer_private_key: "0x0000000000000000000000000000000000000000000000000000000000000001".to_string(),
        timeout: Duration::from_secs(10),
    };

    let client = reqwest::Client::new();
    let result = deploy(&client, &request).await;

    match result {
        Err(DeployError::DeploymentUnverified(message)) => {
            assert!(message.contains(REPORTED_ADDRESS));
        }
        other => panic!("expected DeploymentUnverified, got {other:?}"),
    }
}
