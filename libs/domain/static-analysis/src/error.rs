// [libs/domain/static-analysis/src/error.rs]
use thiserror::Error;

/// Catalogo de fallos de un runner individual. Salvo `Timeout` en el runner
/// simbolico, ningun runner debe propagar estos errores hacia el consenso:
/// un `RunnerError` se registra en `warn` y degrada a cero Findings
/// (spec.md 4.2).
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("[RUNNER_FAULT]: SubprocessSpawnFailed -> {0}")]
    SubprocessSpawnFailed(#[from] std::io::Error),

    #[error("[RUNNER_FAULT]: SubprocessTimeout -> exceeded {0:?}")]
    Timeout(std::time::Duration),

    #[error("[RUNNER_FAULT]: MalformedOutput -> {0}")]
    MalformedOutput(String),

    #[error("[RUNNER_FAULT]: ProviderUnavailable -> {0}")]
    ProviderUnavailable(String),
}
