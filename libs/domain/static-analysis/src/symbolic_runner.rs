// [libs/domain/static-analysis/src/symbolic_runner.rs]
//! Runner simbolico/estatico: invoca un analizador externo (p.ej. Slither)
//! como subproceso con higiene UTF-8 estricta (spec.md 4.2 / 5). Un exit
//! code distinto de cero no es fatal por si mismo: si stdout trae JSON
//! interpretable igual se lee; si no, se degrada a cero Findings.

use crate::error::RunnerError;
use crate::schema::parse_runner_output;
use hyperforge_domain_models::{ContractSource, Finding};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{instrument, warn};

pub const DETECTOR_NAME: &str = "symbolic-runner";

/// Configuracion del binario externo invocado por este runner.
#[derive(Debug, Clone)]
pub struct SymbolicRunnerConfig {
    pub binary: String,
    pub extra_args: Vec<String>,
    pub timeout: Duration,
}

impl Default for SymbolicRunnerConfig {
    fn default() -> Self {
        Self {
            binary: "slither".to_string(),
            extra_args: vec!["--json".to_string(), "-".to_string()],
            timeout: Duration::from_secs(60),
        }
    }
}

/// Ejecuta el analizador simbolico sobre `source`, forzando entorno UTF-8
/// (spec.md 5: "every subprocess invocation sets environment variables to
/// force UTF-8"). Stdin recibe el cuerpo de la fuente; stdout se decodifica
/// con reemplazo de bytes invalidos (nunca panica por encoding).
#[instrument(skip(source, config), fields(binary = %config.binary))]
pub async fn run(source: &ContractSource, config: &SymbolicRunnerConfig) -> Result<Vec<Finding>, RunnerError> {
    let mut child = Command::new(&config.binary)
        .args(&config.extra_args)
        .env("PYTHONIOENCODING", "utf-8")
        .env("LC_ALL", "C.UTF-8")
        .env("LANG", "C.UTF-8")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(source.body.as_bytes()).await?;
    }

    let output = tokio::time::timeout(config.timeout, child.wait_with_output())
        .await
        .map_err(|_| RunnerError::Timeout(config.timeout))??;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if stdout.trim().is_empty() {
        warn!(exit_code = ?output.status.code(), %stderr, "symbolic runner produced no stdout, degrading to zero findings");
        return Ok(Vec::new());
    }

    match parse_runner_output(DETECTOR_NAME, &stdout) {
        Ok(findings) => {
            if !output.status.success() {
                warn!(exit_code = ?output.status.code(), "symbolic runner exited non-zero but stdout parsed; keeping results");
            }
            Ok(findings)
        }
        Err(err) => {
            warn!(%err, "symbolic runner stdout did not match the shared schema, degrading to zero findings");
            Ok(Vec::new())
        }
    }
}

/// Resuelve el path absoluto del binario configurado, para el doctor de
/// precondiciones (spec.md 9 "probe-on-startup"). No invoca el proceso.
pub fn resolve_binary(binary: &str) -> Option<PathBuf> {
    which::which(binary).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_slither() {
        let config = SymbolicRunnerConfig::default();
        assert_eq!(config.binary, "slither");
    }
}
