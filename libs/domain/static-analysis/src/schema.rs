// [libs/domain/static-analysis/src/schema.rs]
//! Esquema JSON compartido por el runner simbolico y el runner LLM:
//! `{"findings":[{"kind","severity","confidence","line","column","evidence"}]}`.
//! Cualquier runner que hable este esquema puede reusar `parse_runner_output`.

use hyperforge_domain_models::{Finding, FindingConfidence, FindingKind, Severity, SourceLocation};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct RawAuditOutput {
    pub findings: Vec<RawFinding>,
}

#[derive(Debug, Deserialize)]
pub struct RawFinding {
    pub kind: String,
    pub severity: String,
    pub confidence: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub evidence: Option<String>,
}

fn parse_severity(raw: &str) -> Option<Severity> {
    Some(match raw.trim().to_ascii_lowercase().as_str() {
        "critical" => Severity::Critical,
        "high" => Severity::High,
        "medium" => Severity::Medium,
        "low" => Severity::Low,
        "info" | "informational" => Severity::Info,
        _ => return None,
    })
}

fn parse_confidence(raw: &str) -> Option<FindingConfidence> {
    Some(match raw.trim().to_ascii_lowercase().as_str() {
        "high" => FindingConfidence::High,
        "medium" => FindingConfidence::Medium,
        "low" => FindingConfidence::Low,
        _ => return None,
    })
}

/// Deserializa `raw_stdout` contra el esquema compartido y convierte cada
/// entrada en un `Finding`, normalizando `kind` (spec.md 4.3 paso 1:
/// descarta clases desconocidas aqui mismo en vez de propagarlas al
/// consenso). Entradas con severidad o confianza irreconocible tambien se
/// descartan. Un `raw_stdout` que no deserializa al esquema produce un
/// `RunnerError::MalformedOutput`, no un panico.
pub fn parse_runner_output(
    detector: &str,
    raw_stdout: &str,
) -> Result<Vec<Finding>, crate::error::RunnerError> {
    let parsed: RawAuditOutput = serde_json::from_str(raw_stdout)
        .map_err(|e| crate::error::RunnerError::MalformedOutput(e.to_string()))?;

    let mut findings = Vec::with_capacity(parsed.findings.len());
    for raw in parsed.findings {
        let Some(kind) = FindingKind::normalize(&raw.kind) else {
            warn!(detector, raw_kind = %raw.kind, "dropping finding with unrecognized kind");
            continue;
        };
        let Some(severity) = parse_severity(&raw.severity) else {
            warn!(detector, raw_severity = %raw.severity, "dropping finding with unrecognized severity");
            continue;
        };
        let Some(confidence) = parse_confidence(&raw.confidence) else {
            warn!(detector, raw_confidence = %raw.confidence, "dropping finding with unrecognized confidence");
            continue;
        };

        findings.push(Finding {
            kind,
            severity,
            confidence,
            location: raw.line.map(|line| SourceLocation { line, column: raw.column, file: None }),
            detector: detector.to_string(),
            evidence: raw.evidence,
            agreeing_detectors: vec![detector.to_string()],
        });
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_payload() {
        let payload = r#"{"findings":[{"kind":"reentrancy","severity":"high","confidence":"medium","line":12,"column":4,"evidence":"call.value"}]}"#;
        let findings = parse_runner_output("slither", payload).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Reentrancy);
        assert_eq!(findings[0].severity, Severity::High);
    }

    #[test]
    fn drops_entries_with_unknown_kind_instead_of_failing() {
        let payload = r#"{"findings":[{"kind":"quantum_bitflip","severity":"high","confidence":"high","line":null,"column":null,"evidence":null}]}"#;
        let findings = parse_runner_output("slither", payload).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn non_json_output_is_malformed_not_panic() {
        let result = parse_runner_output("slither", "not json at all");
        assert!(result.is_err());
    }
}
