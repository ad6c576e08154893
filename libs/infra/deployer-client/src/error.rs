// [libs/infra/deployer-client/src/error.rs]
use thiserror::Error;

/// Catalogo de fallos del adaptador de despliegue (spec.md 4.5). Todos son
/// fatales para el workflow en curso: no existe reintento automatico mas
/// alla del ya agotado por el subproceso mismo.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("[DEPLOY_FAULT]: ToolchainMissing -> {binary} not found on PATH. {install_hint}")]
    ToolchainMissing { binary: String, install_hint: String },

    #[error("[DEPLOY_FAULT]: CompileError -> {0}")]
    CompileError(String),

    #[error("[DEPLOY_FAULT]: InsufficientFunds -> {0}")]
    InsufficientFunds(String),

    #[error("[DEPLOY_FAULT]: NetworkUnreachable -> {0}")]
    NetworkUnreachable(String),

    #[error("[DEPLOY_FAULT]: Timeout -> deployer subprocess exceeded {0:?}")]
    Timeout(std::time::Duration),

    #[error("[DEPLOY_FAULT]: DeploymentUnverified -> {0}")]
    DeploymentUnverified(String),

    #[error("[DEPLOY_FAULT]: MalformedOutput -> {0}")]
    MalformedOutput(String),

    #[error("[DEPLOY_FAULT]: IoError -> {0}")]
    Io(#[from] std::io::Error),

    #[error("[DEPLOY_FAULT]: NetworkError -> {0}")]
    Network(#[from] reqwest::Error),
}
