// [libs/domain/static-analysis/src/dispatch.rs]
//! Despachador de runners: representa el conjunto cerrado de analizadores
//! como variantes etiquetadas (spec.md 9 "Runner polymorphism -> tagged
//! variants") y los ejecuta concurrentemente, uniendo resultados sin dejar
//! que un runner fallido aborte a los demas (spec.md 4.2, 5).

use crate::llm_runner::{self, AuditPromptProvider};
use crate::pattern_runner;
use crate::symbolic_runner::{self, SymbolicRunnerConfig};
use futures::future::join_all;
use hyperforge_domain_models::{ContractSource, Finding};
use std::sync::Arc;
use tracing::warn;

/// Resultado de un runner individual, identificado por nombre de detector,
/// conservado incluso cuando el runner fallo (para que el llamador pueda
/// reportar un `RunnerError` no fatal sin perder la atribucion).
#[derive(Debug)]
pub struct RunnerOutcome {
    pub detector: String,
    pub findings: Vec<Finding>,
    pub error: Option<String>,
}

/// Conjunto cerrado de runners disponibles para una invocacion de
/// auditoria. El runner de patrones siempre esta disponible; los otros dos
/// son opcionales segun configuracion/credenciales (spec.md 4.2).
pub enum RunnerKind {
    Pattern,
    Symbolic(SymbolicRunnerConfig),
    Llm(Arc<dyn AuditPromptProvider>),
}

impl RunnerKind {
    fn detector_name(&self) -> &'static str {
        match self {
            RunnerKind::Pattern => pattern_runner::DETECTOR_NAME,
            RunnerKind::Symbolic(_) => symbolic_runner::DETECTOR_NAME,
            RunnerKind::Llm(_) => llm_runner::DETECTOR_NAME,
        }
    }
}

/// Ejecuta todos los `runners` concurrentemente contra `source`, esperando
/// a que cada tarea finalice (`join_all`) antes de retornar el conjunto
/// completo de resultados (spec.md 5: "task joins are awaited before the
/// consensus step"). Ningun runner individual puede abortar el fan-out: un
/// `RunnerError` se convierte en un `RunnerOutcome` con `findings` vacio.
pub async fn run_all(source: &ContractSource, runners: Vec<RunnerKind>) -> Vec<RunnerOutcome> {
    let tasks = runners.into_iter().map(|runner| {
        let detector = runner.detector_name().to_string();
        async move {
            let result = match &runner {
                RunnerKind::Pattern => Ok(pattern_runner::run(source)),
                RunnerKind::Symbolic(config) => symbolic_runner::run(source, config).await,
                RunnerKind::Llm(provider) => llm_runner::run(source, provider.as_ref()).await,
            };

            match result {
                Ok(findings) => RunnerOutcome { detector, findings, error: None },
                Err(err) => {
                    warn!(detector = %detector, %err, "runner failed, treating as zero findings");
                    RunnerOutcome { detector, findings: Vec::new(), error: Some(err.to_string()) }
                }
            }
        }
    });

    join_all(tasks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperforge_domain_models::Provenance;

    fn source(body: &str) -> ContractSource {
        ContractSource::new(body.to_string(), Provenance::LocalFile, None).unwrap()
    }

    #[tokio::test]
    async fn pattern_runner_alone_completes_fan_out() {
        let outcomes = run_all(
            &source("contract C { function kill() public { selfdestruct(payable(msg.sender)); } }"),
            vec![RunnerKind::Pattern],
        )
        .await;
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].detector, "pattern-runner");
        assert!(!outcomes[0].findings.is_empty());
    }
}
