// [apps/cli/src/policy.rs]
//! Puerta de politica entre Auditing y Resolving (spec.md 4.9 "PolicyGate").
//! `--allow-insecure` es la unica derogacion documentada; nunca degrada
//! silenciosamente un veredicto.

use crate::error::CliError;
use hyperforge_domain_models::AuditVerdict;

/// Retorna `Ok(())` si el workflow puede avanzar a `Resolving`. La unica
/// resolucion de una pregunta abierta de spec.md: `--allow-insecure`
/// deroga tanto severidad `High` como `Critical` (spec.md usa
/// `reviewRequired`, que ya cubre ambas sin distincion adicional).
pub fn evaluate(verdict: &AuditVerdict, allow_insecure: bool) -> Result<(), CliError> {
    if verdict.review_required && !allow_insecure {
        return Err(CliError::AuditGate(format!(
            "overallSeverity={:?} score={} reviewRequired=true",
            verdict.overall_severity, verdict.score
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperforge_domain_models::Severity;

    fn verdict(review_required: bool) -> AuditVerdict {
        AuditVerdict {
            findings: Vec::new(),
            overall_severity: Severity::High,
            score: 40,
            aggregate_confidence: 0.9,
            review_required,
        }
    }

    #[test]
    fn blocks_when_review_required_and_not_bypassed() {
        assert!(evaluate(&verdict(true), false).is_err());
    }

    #[test]
    fn allow_insecure_bypasses_review_gate() {
        assert!(evaluate(&verdict(true), true).is_ok());
    }

    #[test]
    fn passes_when_no_review_required() {
        assert!(evaluate(&verdict(false), false).is_ok());
    }
}
