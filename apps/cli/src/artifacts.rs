// [apps/cli/src/artifacts.rs]
//! Persistencia de artefactos por ejecucion de workflow (spec.md 6 "Artifact
//! layout on disk"). El store es write-only desde las etapas: el
//! orquestador nunca lee de vuelta un artefacto para tomar una decision
//! (spec.md 9 "avoid cyclic state").

use hyperforge_domain_models::{RunId, WorkflowState};
use serde::Serialize;
use std::path::PathBuf;

pub struct ArtifactStore {
    run_dir: PathBuf,
}

impl ArtifactStore {
    pub async fn create(artifacts_root: &std::path::Path, run_id: &RunId) -> std::io::Result<Self> {
        let run_dir = artifacts_root.join("workflows").join(run_id.as_str());
        tokio::fs::create_dir_all(&run_dir).await?;
        Ok(Self { run_dir })
    }

    pub fn path_for(&self, file_name: &str) -> String {
        self.run_dir.join(file_name).to_string_lossy().into_owned()
    }

    pub async fn write_text(&self, file_name: &str, body: &str) -> std::io::Result<()> {
        tokio::fs::write(self.run_dir.join(file_name), body).await
    }

    pub async fn write_json<T: Serialize>(&self, file_name: &str, value: &T) -> std::io::Result<()> {
        let body = serde_json::to_string_pretty(value).expect("artifact values are always serializable");
        self.write_text(file_name, &body).await
    }

    pub async fn write_context(&self, state: &WorkflowState) -> std::io::Result<()> {
        self.write_json("context.json", state).await
    }
}
