// [libs/infra/source-fetch/src/error.rs]
use thiserror::Error;

/// Catalogo de fallos del adaptador de origen de fuente. Todos son fatales
/// para el identificador en curso (spec.md 4.1 / 7): no hay recuperacion
/// automatica mas alla del reintento de red ya agotado.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("[SOURCE_FAULT]: SourceUnavailable -> {0}")]
    Unavailable(String),

    #[error("[SOURCE_FAULT]: SourceNotUtf8 -> {0}")]
    NotUtf8(String),

    #[error("[SOURCE_FAULT]: NetworkError -> {0}")]
    Network(#[from] reqwest::Error),

    #[error("[SOURCE_FAULT]: IoError -> {0}")]
    Io(#[from] std::io::Error),
}
