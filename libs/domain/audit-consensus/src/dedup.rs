// [libs/domain/audit-consensus/src/dedup.rs]
//! Deduplicacion entre runners (spec.md 4.3 paso 2): dos Findings son
//! duplicados si comparten `kind` Y (a) misma `location` dentro de +-2
//! lineas, O (b) mismo hash de evidencia textual. El duplicado fusionado
//! conserva la confianza mas alta entre los runners de origen y registra el
//! conjunto de detectores que coincidieron.

use hyperforge_domain_models::{Finding, FindingConfidence, Severity};
use sha3::{Digest, Keccak256};

const LOCATION_TOLERANCE_LINES: u32 = 2;

fn evidence_hash(evidence: &str) -> String {
    let mut hasher = Keccak256::new();
    hasher.update(evidence.trim().as_bytes());
    hex::encode(hasher.finalize())
}

fn are_duplicates(a: &Finding, b: &Finding) -> bool {
    if a.kind != b.kind {
        return false;
    }

    let same_location = match (&a.location, &b.location) {
        (Some(loc_a), Some(loc_b)) => loc_a.line_distance(loc_b) <= LOCATION_TOLERANCE_LINES,
        _ => false,
    };

    let same_evidence_hash = match (&a.evidence, &b.evidence) {
        (Some(ev_a), Some(ev_b)) if !ev_a.trim().is_empty() && !ev_b.trim().is_empty() => {
            evidence_hash(ev_a) == evidence_hash(ev_b)
        }
        _ => false,
    };

    same_location || same_evidence_hash
}

/// Fusiona un cluster de Findings duplicados en uno solo: severidad maxima
/// (nunca sub-reporta), confianza de runner mas alta, union de detectores
/// que coincidieron, y ubicacion/evidencia tomadas del detector
/// alfabeticamente mas temprano del cluster (tie-break, spec.md 4.3).
fn merge_cluster(mut cluster: Vec<Finding>) -> Finding {
    cluster.sort_by(|a, b| a.detector.cmp(&b.detector));
    let canonical = cluster[0].clone();

    let max_severity = cluster.iter().map(|f| f.severity).max().unwrap_or(Severity::Info);
    let max_confidence = cluster
        .iter()
        .map(|f| f.confidence)
        .max()
        .unwrap_or(FindingConfidence::Low);

    let mut agreeing_detectors: Vec<String> =
        cluster.iter().flat_map(|f| f.agreeing_detectors.clone()).collect();
    agreeing_detectors.sort();
    agreeing_detectors.dedup();

    Finding {
        kind: canonical.kind,
        severity: max_severity,
        confidence: max_confidence,
        location: canonical.location,
        detector: canonical.detector,
        evidence: canonical.evidence,
        agreeing_detectors,
    }
}

/// Agrupa `findings` en clusters de duplicados y retorna uno fusionado por
/// cluster. El orden de entrada no se preserva; el orden de salida es
/// estable por insercion del primer miembro de cada cluster.
pub fn deduplicate(findings: Vec<Finding>) -> Vec<Finding> {
    let mut clusters: Vec<Vec<Finding>> = Vec::new();

    for finding in findings {
        let existing_cluster_index = clusters
            .iter()
            .position(|cluster| cluster.iter().any(|member| are_duplicates(member, &finding)));

        match existing_cluster_index {
            Some(index) => clusters[index].push(finding),
            None => clusters.push(vec![finding]),
        }
    }

    clusters.into_iter().map(merge_cluster).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperforge_domain_models::{FindingKind, SourceLocation};

    fn finding(detector: &str, kind: FindingKind, line: u32, evidence: &str) -> Finding {
        Finding {
            kind,
            severity: Severity::Medium,
            confidence: FindingConfidence::Medium,
            location: Some(SourceLocation { line, column: None, file: None }),
            detector: detector.to_string(),
            evidence: Some(evidence.to_string()),
            agreeing_detectors: vec![detector.to_string()],
        }
    }

    #[test]
    fn merges_findings_with_nearby_location() {
        let a = finding("slither", FindingKind::Reentrancy, 10, "call.value(x)");
        let b = finding("pattern-runner", FindingKind::Reentrancy, 11, "different text");
        let merged = deduplicate(vec![a, b]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].agreeing_detectors.len(), 2);
    }

    #[test]
    fn keeps_findings_distinct_when_far_apart_and_different_evidence() {
        let a = finding("slither", FindingKind::Reentrancy, 10, "call.value(x)");
        let b = finding("pattern-runner", FindingKind::Reentrancy, 500, "totally different");
        let merged = deduplicate(vec![a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merges_by_evidence_hash_regardless_of_location() {
        let mut a = finding("slither", FindingKind::TxOrigin, 10, "tx.origin == owner");
        a.location = None;
        let mut b = finding("pattern-runner", FindingKind::TxOrigin, 900, "tx.origin == owner");
        b.location = None;
        let merged = deduplicate(vec![a, b]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn merge_keeps_maximum_severity() {
        let mut a = finding("slither", FindingKind::Reentrancy, 10, "call.value(x)");
        a.severity = Severity::Critical;
        let b = finding("pattern-runner", FindingKind::Reentrancy, 11, "call.value(x)");
        let merged = deduplicate(vec![a, b]);
        assert_eq!(merged[0].severity, Severity::Critical);
    }
}
