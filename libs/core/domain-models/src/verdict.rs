// [libs/core/domain-models/src/verdict.rs]
/*!
 * APARATO: AUDIT VERDICT MODEL
 * RESPONSABILIDAD: Representar el resultado fusionado de la auditoria.
 */

use crate::finding::{Finding, Severity};
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Veredicto fusionado producido por la consola de consenso de auditoria.
/// Un unico `AuditVerdict` se produce por invocacion de auditoria y es
/// inmutable una vez serializado a `audit.json` (spec.md 3).
#[typeshare]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditVerdict {
    pub findings: Vec<Finding>,
    pub overall_severity: Severity,
    pub score: u8,
    pub aggregate_confidence: f64,
    pub review_required: bool,
}

impl AuditVerdict {
    /// Veredicto "desconocido" emitido cuando ningun runner produjo salida
    /// (spec.md 4.3, modo de fallo de la consola de consenso).
    pub fn unknown(source_confidence: f64) -> Self {
        Self {
            findings: Vec::new(),
            overall_severity: Severity::Info,
            score: 50,
            aggregate_confidence: source_confidence * 0.5,
            review_required: false,
        }
    }
}
