// [libs/infra/deployer-client/src/workspace.rs]
//! Preparacion del workspace de build aislado (spec.md 4.5 paso 1): un
//! directorio temporal con el fuente bajo un nombre determinista, limpiado
//! automaticamente al salir de alcance. spec.md 5 exige que el directorio
//! sea "exclusive per workflow run (unique name containing a run
//! identifier)"; el `RunId` del workflow se usa como prefijo literal del
//! nombre en vez de confiar solo en el sufijo aleatorio del tempdir.

use crate::error::DeployError;
use hyperforge_domain_models::RunId;
use std::path::PathBuf;
use tempfile::TempDir;

pub const CONTRACT_FILE_NAME: &str = "Contract.sol";

/// Directorio de build efimero para un unico intento de despliegue.
pub struct BuildWorkspace {
    _dir: TempDir,
    pub contract_path: PathBuf,
}

impl BuildWorkspace {
    /// Crea el directorio (expandiendo `~` si `base_dir` lo trae, spec.md 9
    /// "artifacts dir configurable"), con `run_id` como prefijo literal del
    /// nombre del directorio, y escribe `source_body` bajo el nombre
    /// determinista `Contract.sol`.
    pub async fn prepare(base_dir: &str, run_id: &RunId, source_body: &str) -> Result<Self, DeployError> {
        let expanded_base = shellexpand::tilde(base_dir).into_owned();
        tokio::fs::create_dir_all(&expanded_base).await?;

        let dir = tempfile::Builder::new()
            .prefix(&format!("{run_id}-"))
            .tempdir_in(&expanded_base)?;
        let contract_path = dir.path().join(CONTRACT_FILE_NAME);
        tokio::fs::write(&contract_path, source_body).await?;

        Ok(Self { _dir: dir, contract_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_source_under_deterministic_name() {
        let run_id = RunId::from("fixed-run-id".to_string());
        let workspace = BuildWorkspace::prepare(std::env::temp_dir().to_str().unwrap(), &run_id, "contract Foo {}")
            .await
            .unwrap();
        assert_eq!(workspace.contract_path.file_name().unwrap(), CONTRACT_FILE_NAME);
        let written = tokio::fs::read_to_string(&workspace.contract_path).await.unwrap();
        assert_eq!(written, "contract Foo {}");
    }

    #[tokio::test]
    async fn workspace_directory_name_contains_the_run_id() {
        let run_id = RunId::from("fixed-run-id".to_string());
        let workspace = BuildWorkspace::prepare(std::env::temp_dir().to_str().unwrap(), &run_id, "contract Foo {}")
            .await
            .unwrap();
        let dir_name = workspace.contract_path.parent().unwrap().file_name().unwrap().to_string_lossy().into_owned();
        assert!(dir_name.contains(run_id.as_str()), "expected {dir_name} to contain {run_id}");
    }
}
