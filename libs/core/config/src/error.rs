// [libs/core/config/src/error.rs]
use thiserror::Error;

/// Catalogo de fallos de configuracion (spec.md 7: siempre fatal al arranque,
/// sin reintento).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("[CONFIG_FAULT]: ConfigMissing:{0}")]
    Missing(String),

    #[error("[CONFIG_FAULT]: ConfigInvalid:{0} -> {1}")]
    Invalid(String, String),

    #[error("[CONFIG_FAULT]: DOCTOR_PROBE_FAILED -> {0}")]
    DoctorProbeFailed(String),
}
