// [libs/domain/static-analysis/src/lib.rs]
/*!
 * =================================================================
 * APARATO: STATIC ANALYSIS RUNNER CATALOG (V1.0)
 * CLASIFICACION: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: PRODUCIR Findings A PARTIR DE UN ContractSource
 *
 * Tres runners con un contrato comun (spec.md 4.2): el runner de patrones
 * (siempre disponible, nunca falla por entrada invalida), el runner
 * simbolico (subproceso externo con higiene UTF-8 estricta), y el runner
 * LLM (opcional, prompt de auditoria con esquema fijo). `dispatch` los
 * ejecuta concurrentemente y une los resultados sin dejar que un runner
 * individual aborte a los demas.
 * =================================================================
 */

pub mod dispatch;
pub mod error;
pub mod llm_runner;
pub mod pattern_runner;
pub mod schema;
pub mod symbolic_runner;

pub use dispatch::{run_all, RunnerKind, RunnerOutcome};
pub use error::RunnerError;
pub use llm_runner::AuditPromptProvider;
pub use symbolic_runner::SymbolicRunnerConfig;
