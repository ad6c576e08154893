// [libs/infra/deployer-client/src/abi_compile.rs]
//! Obtencion del ABI compilado antes del despliegue real (spec.md 4.4 paso
//! 1 depende de un ABI ya compilado; spec.md 4.5 no distingue un paso de
//! "solo compilar" del despliegue, asi que esta invocacion reusa el mismo
//! binario y workspace aislado con una bandera adicional de solo-ABI). Un
//! binario ausente o una compilacion fallida produce el mismo
//! `DeployError` que el despliegue real: no hay una segunda taxonomia de
//! error para esta sub-etapa.

use crate::error::DeployError;
use crate::workspace::BuildWorkspace;
use hyperforge_domain_models::RunId;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::instrument;

const ABI_ONLY_FLAG: &str = "--abi-only";

/// Compila `source_body` y devuelve el ABI JSON crudo, sin desplegar nada.
#[instrument(skip(binary, build_artifacts_dir, source_body))]
pub async fn compile_abi(
    binary: &str,
    build_artifacts_dir: &str,
    run_id: &RunId,
    source_body: &str,
    timeout: Duration,
) -> Result<String, DeployError> {
    which::which(binary).map_err(|_| DeployError::ToolchainMissing {
        binary: binary.to_string(),
        install_hint: format!("install `{binary}` and ensure it is on PATH"),
    })?;

    let workspace = BuildWorkspace::prepare(build_artifacts_dir, run_id, source_body).await?;

    let mut child = Command::new(binary)
        .arg(workspace.contract_path.to_string_lossy().into_owned())
        .arg(ABI_ONLY_FLAG)
        .env("PYTHONIOENCODING", "utf-8")
        .env("LC_ALL", "C.UTF-8")
        .env("LANG", "C.UTF-8")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| DeployError::Timeout(timeout))??;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    let trimmed = stdout.trim();
    if trimmed.is_empty() || serde_json::from_str::<serde_json::Value>(trimmed).is_err() {
        return Err(DeployError::CompileError(format!(
            "abi-only compile did not produce JSON: stdout={stdout:?} stderr={stderr:?}"
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[tokio::test]
    async fn non_utf8_stdout_is_reported_as_a_compile_error_not_a_panic() {
        let workdir = tempfile::tempdir().unwrap();
        // printf with an octal escape emits a raw invalid-UTF-8 byte (0xff);
        // from_utf8_lossy must absorb this rather than panicking or
        // propagating a decode error past the orchestrator.
        let script_path = workdir.path().join("non-utf8-deployer.sh");
        tokio::fs::write(&script_path, "#!/bin/sh\nprintf '\\377\\376garbage'\n").await.unwrap();
        let mut perms = tokio::fs::metadata(&script_path).await.unwrap().permissions();
        perms.set_mode(0o755);
        tokio::fs::set_permissions(&script_path, perms).await.unwrap();

        let build_dir = workdir.path().join("build").to_string_lossy().into_owned();
        let run_id = RunId::from("fixed-run-id".to_string());
        let result = compile_abi(
            script_path.to_str().unwrap(),
            &build_dir,
            &run_id,
            "pragma solidity ^0.8.0; contract C {}",
            Duration::from_secs(5),
        )
        .await;

        assert!(matches!(result, Err(DeployError::CompileError(_))));
    }
}
