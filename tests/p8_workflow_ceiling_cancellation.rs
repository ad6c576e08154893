// [tests/p8_workflow_ceiling_cancellation.rs]
//! A workflow whose Generating stage never returns in time must reach
//! `Failed` with a `WorkflowCeilingExceeded` error once the configured
//! ceiling elapses, rather than hanging indefinitely.

use hyperforge_cli::cli::WorkflowRunArgs;
use hyperforge_cli::orchestrator;
use hyperforge_config::HyperforgeConfig;
use hyperforge_domain_models::NetworkConfig;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn seed_template_cache(cache_dir: &std::path::Path) {
    let template_path = cache_dir.join("system").join("generate-contract.md");
    tokio::fs::create_dir_all(template_path.parent().unwrap()).await.unwrap();
    tokio::fs::write(&template_path, "Generate a minimal Solidity contract.").await.unwrap();
}

#[tokio::test]
async fn ceiling_exceeded_fails_the_workflow_instead_of_hanging() {
    let llm_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)).set_body_json(serde_json::json!({
            "choices": [{ "message": { "content": "pragma solidity ^0.8.0; contract C {}" } }]
        })))
        .mount(&llm_server)
        .await;

    let workdir = tempfile::tempdir().unwrap();
    let template_cache_dir = workdir.path().join("template-cache");
    seed_template_cache(&template_cache_dir).await;

    let config = HyperforgeConfig {
        network: NetworkConfig::new(31337, "http://127.0.0.1:1", "hyperion-test"),
        deployer_private_key: None,
        deployer_address: None,
        llm_api_key: Some("test-key".to_string()),
        explorer_api_key: None,
        artifacts_dir: workdir.path().join("artifacts"),
        deployer_binary: "definitely-not-a-real-deployer-binary".to_string(),
        deploy_timeout: Duration::from_secs(10),
        // far shorter than the mock's 5s response delay: Generating never
        // finishes before the ceiling fires.
        workflow_ceiling: Duration::from_millis(200),
        explorer_base_url: "http://127.0.0.1:1".to_string(),
        sourcify_base_url: "http://127.0.0.1:1".to_string(),
        template_gateway_url: "http://127.0.0.1:1".to_string(),
        template_cache_dir,
        llm_api_base: llm_server.uri(),
        llm_model: "gpt-4o-mini".to_string(),
    };

    let args = WorkflowRunArgs {
        prompt: "a minimal storage contract".to_string(),
        no_audit: true,
        no_verify: true,
        test_only: true,
        allow_insecure: false,
        network: "hyperion".to_string(),
        contract_type: "GenericContract".to_string(),
    };

    let http_client = reqwest::Client::new();
    let started = std::time::Instant::now();
    let result = orchestrator::run_workflow(&config, &http_client, &args).await;
    let elapsed = started.elapsed();

    assert!(result.is_err());
    // the ceiling, not the mock's 5s delay, determines when this returns
    assert!(elapsed < Duration::from_secs(4), "workflow did not fail fast on its ceiling: took {elapsed:?}");
}
