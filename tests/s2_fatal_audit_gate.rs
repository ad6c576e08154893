// [tests/s2_fatal_audit_gate.rs]
//! A selfdestruct call in an unguarded public function must survive
//! consensus as a Critical finding once a second runner corroborates it,
//! drive `reviewRequired`, and be rejected by the policy gate when
//! `--allow-insecure` is absent.

use hyperforge_audit_consensus::build_verdict;
use hyperforge_cli::policy;
use hyperforge_domain_models::{ContractSource, Finding, FindingConfidence, FindingKind, Provenance, Severity, SourceLocation};
use hyperforge_static_analysis::pattern_runner;

const VULNERABLE_SOURCE: &str = r#"
pragma solidity ^0.8.0;
contract Drainable {
    function kill() public {
        selfdestruct(payable(msg.sender));
    }
}
"#;

#[test]
fn selfdestruct_blocks_deployment_without_bypass() {
    let source = ContractSource::new(VULNERABLE_SOURCE, Provenance::LLMGenerated, None).unwrap();
    let pattern_findings = pattern_runner::run(&source);
    let suicidal = pattern_findings.iter().find(|f| f.kind == FindingKind::Suicidal).unwrap();
    assert_eq!(suicidal.severity, Severity::Critical);

    // A second, independent runner corroborating the same location is what
    // pattern-matching alone cannot provide on its own confidence; this
    // mirrors a real audit where the symbolic runner agrees.
    let corroborating = Finding {
        kind: FindingKind::Suicidal,
        severity: Severity::Critical,
        confidence: FindingConfidence::High,
        location: suicidal.location.clone().or(Some(SourceLocation { line: 5, column: None, file: None })),
        detector: "symbolic-runner".to_string(),
        evidence: suicidal.evidence.clone(),
        agreeing_detectors: vec!["symbolic-runner".to_string()],
    };

    let verdict = build_verdict(vec![pattern_findings, vec![corroborating]], source.confidence);
    assert_eq!(verdict.overall_severity, Severity::Critical);
    assert!(verdict.review_required);
    assert!(verdict.findings.iter().any(|f| f.kind == FindingKind::Suicidal && f.agreeing_detectors.len() >= 2));

    let blocked = policy::evaluate(&verdict, false);
    assert!(blocked.is_err());

    let bypassed = policy::evaluate(&verdict, true);
    assert!(bypassed.is_ok());
}
