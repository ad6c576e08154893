// [libs/infra/deployer-client/src/lib.rs]
/*!
 * APARATO: DEPLOYER ADAPTER
 * RESPONSABILIDAD: Compilar y desplegar un contrato mediante el subproceso
 * del toolchain externo, reconciliando el resultado contra un
 * `DeploymentRecord` verificado on-chain (spec.md 4.5).
 */

mod abi_arg;
mod abi_compile;
mod deploy;
mod error;
mod rpc_verify;
mod workspace;

pub use abi_compile::compile_abi;
pub use deploy::{deploy, DeployRequest, DEFAULT_TIMEOUT};
pub use error::DeployError;
