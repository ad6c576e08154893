// [libs/infra/explorer-client/src/error.rs]
use thiserror::Error;

/// Fallos del adaptador de verificacion (spec.md 4.6 / 7). Todos son
/// no-fatales para el workflow: el despliegue ya tuvo exito antes de que
/// este adaptador se invoque.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("[VERIFY_FAULT]: VerificationTimeout -> no terminal status after {0:?}")]
    Timeout(std::time::Duration),

    #[error("[VERIFY_FAULT]: VerificationMismatch -> {0}")]
    Mismatch(String),

    #[error("[VERIFY_FAULT]: SubmissionRejected -> {0}")]
    SubmissionRejected(String),

    #[error("[VERIFY_FAULT]: NetworkError -> {0}")]
    Network(#[from] reqwest::Error),
}
