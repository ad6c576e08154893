// [libs/domain/audit-consensus/src/engine.rs]
//! Motor de consenso: fusiona las listas de Findings de cada runner activo
//! en un unico AuditVerdict (spec.md 4.3, pasos 3-7).

use crate::dedup::deduplicate;
use hyperforge_domain_models::{AuditVerdict, Finding, FindingConfidence, Severity};
use tracing::debug;

fn score_penalty(severity: Severity) -> i64 {
    match severity {
        Severity::Critical => 40,
        Severity::High => 25,
        Severity::Medium => 10,
        Severity::Low => 3,
        Severity::Info => 0,
    }
}

/// Paso 3: conserva un Finding fusionado iff al menos dos detectores
/// distintos coincidieron, O tiene severidad >= High reportada por un
/// detector de confianza alta.
fn passes_consensus_filter(finding: &Finding) -> bool {
    finding.detector_count() >= 2 || (finding.severity >= Severity::High && finding.confidence == FindingConfidence::High)
}

/// Paso 4: si la fuente tiene confianza < 0.5, degrada cada Finding
/// conservado un escalon de severidad, saturando en Info.
fn degrade_by_provenance(mut findings: Vec<Finding>, source_confidence: f64) -> Vec<Finding> {
    if source_confidence < 0.5 {
        for finding in &mut findings {
            finding.severity = finding.severity.degrade_one_step();
        }
    }
    findings
}

/// Paso 5: puntaje agregado, partiendo de 100 y restando una penalizacion
/// por Finding conservado, ponderada por el peso de confianza del runner.
fn aggregate_score(kept: &[Finding]) -> u8 {
    let mut score: f64 = 100.0;
    for finding in kept {
        score -= score_penalty(finding.severity) as f64 * finding.confidence.score_weight();
    }
    score.clamp(0.0, 100.0).round() as u8
}

/// Paso 6: confianza agregada = min(confianza de procedencia, acuerdo
/// promedio entre detectores), donde el acuerdo promedio mapea a [0.5, 1.0].
/// Sin Findings conservados no hay desacuerdo que penalizar, asi que el
/// acuerdo promedio se trata como maximo (1.0).
fn aggregate_confidence(kept: &[Finding], active_runner_count: usize, source_confidence: f64) -> f64 {
    if kept.is_empty() || active_runner_count <= 1 {
        return source_confidence.clamp(0.0, 1.0);
    }

    let total_agreement: usize = kept.iter().map(|f| f.detector_count()).sum();
    let average_agreement = total_agreement as f64 / kept.len() as f64;

    let mean_agreement =
        0.5 + 0.5 * (average_agreement - 1.0) / (active_runner_count as f64 - 1.0);
    let mean_agreement = mean_agreement.clamp(0.5, 1.0);

    source_confidence.min(mean_agreement)
}

/// Fusiona `per_runner_findings` (una lista por runner que efectivamente se
/// ejecuto, incluyendo listas vacias de runners que no hallaron nada) en un
/// `AuditVerdict`. Si ningun runner se ejecuto (`per_runner_findings`
/// vacio), retorna el veredicto "desconocido" de spec.md 4.3.
pub fn build_verdict(per_runner_findings: Vec<Vec<Finding>>, source_confidence: f64) -> AuditVerdict {
    let active_runner_count = per_runner_findings.len();

    if active_runner_count == 0 {
        return AuditVerdict::unknown(source_confidence);
    }

    let all_findings: Vec<Finding> = per_runner_findings.into_iter().flatten().collect();

    let deduplicated = deduplicate(all_findings);
    debug!(deduplicated_count = deduplicated.len(), "deduplication complete");

    let kept: Vec<Finding> = deduplicated.into_iter().filter(passes_consensus_filter).collect();
    debug!(kept_count = kept.len(), "consensus filter complete");

    let kept = degrade_by_provenance(kept, source_confidence);

    let overall_severity = kept.iter().map(|f| f.severity).max().unwrap_or(Severity::Info);
    let score = aggregate_score(&kept);
    let confidence = aggregate_confidence(&kept, active_runner_count, source_confidence);
    let review_required = overall_severity >= Severity::High;

    AuditVerdict {
        findings: kept,
        overall_severity,
        score,
        aggregate_confidence: confidence,
        review_required,
    }
}
