// [libs/domain/static-analysis/src/pattern_runner.rs]
//! Runner de patrones: siempre disponible, nunca falla por fuente
//! sintacticamente invalida (spec.md 4.2 "Must never raise for syntactically
//! invalid source").

use hyperforge_domain_models::{ContractSource, Finding, FindingConfidence, FindingKind, Severity, SourceLocation};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DETECTOR_NAME: &str = "pattern-runner";

struct PatternRule {
    kind: FindingKind,
    severity: Severity,
    confidence: FindingConfidence,
    pattern: Lazy<Regex>,
}

static RULES: &[PatternRule] = &[
    PatternRule {
        kind: FindingKind::Suicidal,
        severity: Severity::Critical,
        confidence: FindingConfidence::Medium,
        pattern: Lazy::new(|| Regex::new(r"\bselfdestruct\s*\(").unwrap()),
    },
    PatternRule {
        kind: FindingKind::UnsafeDelegatecall,
        severity: Severity::High,
        confidence: FindingConfidence::Medium,
        pattern: Lazy::new(|| Regex::new(r"\.delegatecall\s*\(").unwrap()),
    },
    PatternRule {
        kind: FindingKind::TxOrigin,
        severity: Severity::High,
        confidence: FindingConfidence::High,
        pattern: Lazy::new(|| Regex::new(r"\btx\.origin\b").unwrap()),
    },
    PatternRule {
        kind: FindingKind::TimestampDependence,
        severity: Severity::Low,
        confidence: FindingConfidence::Low,
        pattern: Lazy::new(|| Regex::new(r"\bblock\.timestamp\b").unwrap()),
    },
    PatternRule {
        kind: FindingKind::UncheckedCall,
        severity: Severity::Medium,
        confidence: FindingConfidence::Low,
        pattern: Lazy::new(|| Regex::new(r"\.call\s*\{[^}]*\}\s*\(|\.call\s*\(").unwrap()),
    },
    PatternRule {
        kind: FindingKind::GasLimitLoop,
        severity: Severity::Medium,
        confidence: FindingConfidence::Low,
        pattern: Lazy::new(|| Regex::new(r"for\s*\([^)]*;\s*[a-zA-Z0-9_]+\s*<\s*[a-zA-Z0-9_]+\.length").unwrap()),
    },
];

/// Escanea `source.body` linea por linea contra el catalogo de patrones
/// cerrado. Cada coincidencia produce un Finding; una linea puede disparar
/// mas de una regla.
pub fn run(source: &ContractSource) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (zero_based_index, line_text) in source.body.lines().enumerate() {
        let line_number = zero_based_index as u32 + 1;
        for rule in RULES {
            if rule.pattern.is_match(line_text) {
                findings.push(Finding {
                    kind: rule.kind,
                    severity: rule.severity,
                    confidence: rule.confidence,
                    location: Some(SourceLocation { line: line_number, column: None, file: None }),
                    detector: DETECTOR_NAME.to_string(),
                    evidence: Some(line_text.trim().to_string()),
                    agreeing_detectors: vec![DETECTOR_NAME.to_string()],
                });
            }
        }
    }

    findings
}
