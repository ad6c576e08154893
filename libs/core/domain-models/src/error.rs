// [libs/core/domain-models/src/error.rs]
use thiserror::Error;

/// Catalogo de fallos en la construccion de entidades del dominio.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainModelError {
    #[error("[MODEL_FAULT]: CONTRACT_SOURCE_EMPTY")]
    EmptySource,

    #[error("[MODEL_FAULT]: INVALID_TRANSACTION_HASH -> {0}")]
    InvalidTransactionHash(String),

    #[error("[MODEL_FAULT]: INVALID_CONTRACT_ADDRESS -> {0}")]
    InvalidContractAddress(String),

    #[error("[MODEL_FAULT]: SCORE_OUT_OF_RANGE -> {0}")]
    ScoreOutOfRange(i64),

    #[error("[MODEL_FAULT]: CONFIDENCE_OUT_OF_RANGE -> {0}")]
    ConfidenceOutOfRange(f64),
}
