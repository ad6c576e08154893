// [tests/p1_workflow_stage_monotonicity.rs]
//! A workflow that bypasses deployment still only ever moves forward
//! through the stage order, and the context persisted to disk after each
//! transition reflects exactly the stages actually visited — never a
//! skipped or revisited one.

use hyperforge_cli::artifacts::ArtifactStore;
use hyperforge_domain_models::{ArtifactRef, RunId, Stage, WorkflowState};

#[tokio::test]
async fn test_only_run_advances_forward_and_persists_each_step() {
    let artifacts_root = tempfile::tempdir().unwrap();
    let run_id = RunId::new();
    let store = ArtifactStore::create(artifacts_root.path(), &run_id).await.unwrap();

    let mut state = WorkflowState::new(run_id.clone());
    let mut visited = vec![state.stage];

    for next in [Stage::Generating, Stage::Auditing, Stage::PolicyGate] {
        state.transition_to(next).unwrap();
        state.record_artifact(next, ArtifactRef::new(format!("{next:?}.json")));
        store.write_context(&state).await.unwrap();
        visited.push(next);
    }

    // A test-only run skips Resolving/Deploying/Verifying entirely rather
    // than running them against a real network; record the bypass and jump
    // straight to Testing. This is still a forward move, never a skip back.
    state.record_bypass("test_only");
    state.transition_to(Stage::Testing).unwrap();
    store.write_context(&state).await.unwrap();
    visited.push(Stage::Testing);

    state.transition_to(Stage::Done).unwrap();
    store.write_context(&state).await.unwrap();
    visited.push(Stage::Done);

    // no stage repeats across the whole run
    let mut deduped = visited.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(visited.len(), deduped.len());

    // the persisted context reflects the final stage and carries the bypass
    let persisted = tokio::fs::read_to_string(store.path_for("context.json")).await.unwrap();
    let reloaded: WorkflowState = serde_json::from_str(&persisted).unwrap();
    assert_eq!(reloaded.stage, Stage::Done);
    assert_eq!(reloaded.bypassed_stages, vec!["test_only".to_string()]);
    assert!(reloaded.artifacts.contains_key("Generating"));
    assert!(reloaded.artifacts.contains_key("PolicyGate"));
    assert!(!reloaded.artifacts.contains_key("Resolving"));

    // forward-only holds even once terminal: no resurrection into an
    // earlier stage, and Done cannot be left once reached.
    assert!(state.transition_to(Stage::Auditing).is_err());
}

#[tokio::test]
async fn a_failure_mid_pipeline_is_recorded_without_erasing_prior_progress() {
    let artifacts_root = tempfile::tempdir().unwrap();
    let run_id = RunId::new();
    let store = ArtifactStore::create(artifacts_root.path(), &run_id).await.unwrap();

    let mut state = WorkflowState::new(run_id);
    state.transition_to(Stage::Generating).unwrap();
    state.record_artifact(Stage::Generating, ArtifactRef::new("source.sol"));
    store.write_context(&state).await.unwrap();

    state.transition_to(Stage::Auditing).unwrap();
    state.record_error(hyperforge_domain_models::ErrorRecord::new(
        "audit_timeout",
        "symbolic runner exceeded the configured timeout",
        Some("raise the configured symbolic-runner timeout or check the binary is healthy".to_string()),
    ));
    state.transition_to(Stage::Failed).unwrap();
    store.write_context(&state).await.unwrap();

    let persisted = tokio::fs::read_to_string(store.path_for("context.json")).await.unwrap();
    let reloaded: WorkflowState = serde_json::from_str(&persisted).unwrap();
    assert_eq!(reloaded.stage, Stage::Failed);
    assert_eq!(reloaded.errors.len(), 1);
    // the Generating artifact recorded before the failure is still present;
    // a failure never retroactively erases prior successful-stage evidence
    assert!(reloaded.artifacts.contains_key("Generating"));
}
