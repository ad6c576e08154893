// [libs/domain/constructor-resolver/src/error.rs]
use thiserror::Error;

/// Catalogo de fallos del resolutor de argumentos de constructor. Todos son
/// fatales para el workflow (spec.md 4.4 / 7: "Always fatal") — este
/// componente reemplaza la clase historica de bug "silent success with
/// wrong args".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolverError {
    #[error("[RESOLVER_FAULT]: ConstructorMismatch -> abi signature `{abi_signature}` disagrees with source signature `{source_signature}`")]
    ConstructorMismatch { abi_signature: String, source_signature: String },

    #[error("[RESOLVER_FAULT]: ArgumentsRequired -> constructor `{0}` has parameters but none were supplied and no well-known default applies")]
    ArgumentsRequired(String),

    #[error("[RESOLVER_FAULT]: ArgumentTypeError -> parameter `{name}` declared `{declared_type}`, got `{supplied_value}`")]
    ArgumentTypeError { name: String, declared_type: String, supplied_value: String },

    #[error("[RESOLVER_FAULT]: ArgumentCountMismatch -> expected {expected} positional arguments, got {got}")]
    ArgumentCountMismatch { expected: usize, got: usize },

    #[error("[RESOLVER_FAULT]: MissingNamedArgument -> `{0}`")]
    MissingNamedArgument(String),

    #[error("[RESOLVER_FAULT]: InvalidAbi -> {0}")]
    InvalidAbi(String),
}
