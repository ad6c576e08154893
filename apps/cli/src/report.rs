// [apps/cli/src/report.rs]
//! Renderizado del `AuditVerdict` para el comando standalone `audit contract`
//! (spec.md 6: `--format json|markdown|html`, `--severity MIN`). El filtro
//! de severidad es puramente de presentacion: nunca muta el veredicto
//! persistido en `audit.json`, solo el subconjunto que se imprime.

use crate::error::CliError;
use hyperforge_domain_models::{AuditVerdict, Finding, Severity};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
    Html,
}

impl FromStr for ReportFormat {
    type Err = CliError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(CliError::InvalidInput(format!("unknown report format `{other}`, expected json|markdown|html"))),
        }
    }
}

/// Parsea la bandera `--severity MIN` al umbral de severidad correspondiente.
pub fn parse_severity_floor(raw: &str) -> Result<Severity, CliError> {
    match raw.to_ascii_lowercase().as_str() {
        "info" => Ok(Severity::Info),
        "low" => Ok(Severity::Low),
        "medium" => Ok(Severity::Medium),
        "high" => Ok(Severity::High),
        "critical" => Ok(Severity::Critical),
        other => Err(CliError::InvalidInput(format!("unknown severity floor `{other}`"))),
    }
}

fn filtered_findings<'a>(verdict: &'a AuditVerdict, floor: Option<Severity>) -> Vec<&'a Finding> {
    verdict
        .findings
        .iter()
        .filter(|finding| floor.map(|min| finding.severity >= min).unwrap_or(true))
        .collect()
}

/// Renderiza el veredicto en el formato solicitado, aplicando el filtro de
/// severidad minima antes de serializar. El veredicto persistido en
/// `audit.json` nunca se toca: este es unicamente el texto de presentacion.
pub fn render(verdict: &AuditVerdict, format: ReportFormat, floor: Option<Severity>) -> Result<String, CliError> {
    let kept = filtered_findings(verdict, floor);

    match format {
        ReportFormat::Json => {
            let payload = serde_json::json!({
                "overallSeverity": format!("{:?}", verdict.overall_severity),
                "score": verdict.score,
                "aggregateConfidence": verdict.aggregate_confidence,
                "reviewRequired": verdict.review_required,
                "findings": kept,
            });
            serde_json::to_string_pretty(&payload).map_err(CliError::from)
        }
        ReportFormat::Markdown => Ok(render_markdown(verdict, &kept)),
        ReportFormat::Html => Ok(render_html(verdict, &kept)),
    }
}

fn render_markdown(verdict: &AuditVerdict, kept: &[&Finding]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Audit report");
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Overall severity**: {:?}", verdict.overall_severity);
    let _ = writeln!(out, "- **Score**: {}/100", verdict.score);
    let _ = writeln!(out, "- **Aggregate confidence**: {:.2}", verdict.aggregate_confidence);
    let _ = writeln!(out, "- **Review required**: {}", verdict.review_required);
    let _ = writeln!(out);

    if kept.is_empty() {
        let _ = writeln!(out, "No findings at or above the requested severity floor.");
        return out;
    }

    let _ = writeln!(out, "| Kind | Severity | Confidence | Detectors | Location | Evidence |");
    let _ = writeln!(out, "|---|---|---|---|---|---|");
    for finding in kept {
        let location = finding
            .location
            .as_ref()
            .map(|loc| format!("{}:{}", loc.file.clone().unwrap_or_default(), loc.line))
            .unwrap_or_else(|| "-".to_string());
        let evidence = finding.evidence.clone().unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "| {:?} | {:?} | {:?} | {} | {} | {} |",
            finding.kind,
            finding.severity,
            finding.confidence,
            finding.agreeing_detectors.join(", "),
            location,
            evidence.replace('\n', " "),
        );
    }
    out
}

fn render_html(verdict: &AuditVerdict, kept: &[&Finding]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<html><body>");
    let _ = writeln!(out, "<h1>Audit report</h1>");
    let _ = writeln!(out, "<ul>");
    let _ = writeln!(out, "<li>Overall severity: {:?}</li>", verdict.overall_severity);
    let _ = writeln!(out, "<li>Score: {}/100</li>", verdict.score);
    let _ = writeln!(out, "<li>Aggregate confidence: {:.2}</li>", verdict.aggregate_confidence);
    let _ = writeln!(out, "<li>Review required: {}</li>", verdict.review_required);
    let _ = writeln!(out, "</ul>");

    if kept.is_empty() {
        let _ = writeln!(out, "<p>No findings at or above the requested severity floor.</p>");
    } else {
        let _ = writeln!(out, "<table border=\"1\"><tr><th>Kind</th><th>Severity</th><th>Confidence</th><th>Detectors</th></tr>");
        for finding in kept {
            let _ = writeln!(
                out,
                "<tr><td>{:?}</td><td>{:?}</td><td>{:?}</td><td>{}</td></tr>",
                finding.kind,
                finding.severity,
                finding.confidence,
                finding.agreeing_detectors.join(", "),
            );
        }
        let _ = writeln!(out, "</table>");
    }

    let _ = writeln!(out, "</body></html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperforge_domain_models::{FindingConfidence, FindingKind};

    fn sample_verdict() -> AuditVerdict {
        AuditVerdict {
            findings: vec![Finding {
                kind: FindingKind::Reentrancy,
                severity: Severity::High,
                confidence: FindingConfidence::High,
                location: None,
                detector: "pattern".to_string(),
                evidence: Some("withdraw()".to_string()),
                agreeing_detectors: vec!["pattern".to_string()],
            }],
            overall_severity: Severity::High,
            score: 55,
            aggregate_confidence: 0.8,
            review_required: true,
        }
    }

    #[test]
    fn severity_floor_filters_lower_findings() {
        let verdict = sample_verdict();
        let kept = filtered_findings(&verdict, Some(Severity::Critical));
        assert!(kept.is_empty());
    }

    #[test]
    fn json_render_includes_review_flag() {
        let rendered = render(&sample_verdict(), ReportFormat::Json, None).unwrap();
        assert!(rendered.contains("\"reviewRequired\": true"));
    }

    #[test]
    fn markdown_render_has_table_header_when_findings_present() {
        let rendered = render(&sample_verdict(), ReportFormat::Markdown, None).unwrap();
        assert!(rendered.contains("| Kind | Severity"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
