// [libs/infra/template-store/src/error.rs]
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("[TEMPLATE_FAULT]: TemplateUnavailable -> {0}")]
    Unavailable(String),

    #[error("[TEMPLATE_FAULT]: IoError -> {0}")]
    Io(#[from] std::io::Error),

    #[error("[TEMPLATE_FAULT]: NetworkError -> {0}")]
    Network(#[from] reqwest::Error),
}
