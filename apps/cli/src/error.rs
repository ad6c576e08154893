// [apps/cli/src/error.rs]
//! Taxonomia de error de la CLI y su mapeo a codigo de salida (spec.md 6:
//! "0 success, 1 general error, 2 configuration error, 3 network error,
//! 4 deployment error").

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("[CLI_FAULT]: Config -> {0}")]
    Config(#[from] hyperforge_config::ConfigError),

    #[error("[CLI_FAULT]: Source -> {0}")]
    Source(#[from] hyperforge_source_fetch::SourceError),

    #[error("[CLI_FAULT]: Llm -> {0}")]
    Llm(#[from] hyperforge_llm_client::LLMError),

    #[error("[CLI_FAULT]: Resolver -> {0}")]
    Resolver(#[from] hyperforge_constructor_resolver::ResolverError),

    #[error("[CLI_FAULT]: Deploy -> {0}")]
    Deploy(#[from] hyperforge_deployer_client::DeployError),

    #[error("[CLI_FAULT]: Verify -> {0}")]
    Verify(#[from] hyperforge_explorer_client::VerifyError),

    #[error("[CLI_FAULT]: Template -> {0}")]
    Template(#[from] hyperforge_template_store::TemplateError),

    #[error("[CLI_FAULT]: Domain -> {0}")]
    Domain(#[from] hyperforge_domain_models::DomainModelError),

    #[error("[CLI_FAULT]: AuditGate -> review required and --allow-insecure not set: {0}")]
    AuditGate(String),

    #[error("[CLI_FAULT]: Cancelled -> {0}")]
    Cancelled(String),

    #[error("[CLI_FAULT]: Io -> {0}")]
    Io(#[from] std::io::Error),

    #[error("[CLI_FAULT]: Json -> {0}")]
    Json(#[from] serde_json::Error),

    #[error("[CLI_FAULT]: InvalidInput -> {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Clasifica el error en el bucket de codigo de salida de spec.md 6.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Source(hyperforge_source_fetch::SourceError::Network(_)) => 3,
            CliError::Verify(_) => 3,
            CliError::Deploy(_) => 4,
            CliError::Llm(_) => 1,
            CliError::Resolver(_) => 1,
            CliError::Template(_) => 1,
            CliError::AuditGate(_) => 1,
            CliError::Cancelled(_) => 1,
            CliError::Source(_) => 1,
            CliError::Io(_) => 1,
            CliError::Json(_) => 1,
            CliError::Domain(_) => 1,
            CliError::InvalidInput(_) => 1,
        }
    }

    /// Nombre de categoria machine-readable para `ErrorRecord.kind`
    /// (spec.md 7: "a machine-readable kind").
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Config(_) => "ConfigFault",
            CliError::Source(_) => "SourceFault",
            CliError::Llm(_) => "LLMFault",
            CliError::Resolver(_) => "ResolverFault",
            CliError::Deploy(_) => "DeployerFault",
            CliError::Verify(_) => "VerifierFault",
            CliError::Template(_) => "TemplateFault",
            CliError::AuditGate(_) => "AuditGate",
            CliError::Cancelled(_) => "Cancelled",
            CliError::Io(_) => "IoFault",
            CliError::Json(_) => "JsonFault",
            CliError::Domain(_) => "DomainFault",
            CliError::InvalidInput(_) => "InvalidInput",
        }
    }
}
