// [libs/core/domain-models/src/finding.rs]
/*!
 * APARATO: FINDING DOMAIN MODEL
 * RESPONSABILIDAD: Representar un hallazgo de seguridad reportado por un runner.
 */

use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Clase de vulnerabilidad detectada. `Other` conserva runners que reportan
/// una clase fuera del catalogo cerrado (normalizada, nunca descartada aqui
/// — la normalizacion/descarte de clases desconocidas vive en la consola de
/// consenso, spec.md 4.3 paso 1).
#[typeshare]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FindingKind {
    Reentrancy,
    IntegerOverflow,
    TxOrigin,
    TimestampDependence,
    UncheckedCall,
    Suicidal,
    UnsafeDelegatecall,
    GasLimitLoop,
    UnprotectedWithdrawal,
    FrontRunning,
    Other,
}

impl FindingKind {
    /// Intenta normalizar una etiqueta libre (proveniente de un runner
    /// externo o del LLM) al enum cerrado. Retorna `None` para clases que
    /// ningun runner documentado produce, de forma que el consumidor pueda
    /// descartarlas explicitamente (spec.md 4.3 paso 1: "dropped").
    pub fn normalize(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', '-', ' '], "");
        Some(match normalized.as_str() {
            "reentrancy" => Self::Reentrancy,
            "integeroverflow" | "overflow" | "integerunderflow" => Self::IntegerOverflow,
            "txorigin" => Self::TxOrigin,
            "timestampdependence" | "timestamp" => Self::TimestampDependence,
            "uncheckedcall" | "uncheckedlowlevelcall" | "uncheckedreturnvalue" => Self::UncheckedCall,
            "suicidal" | "selfdestruct" => Self::Suicidal,
            "unsafedelegatecall" | "delegatecall" => Self::UnsafeDelegatecall,
            "gaslimitloop" | "unboundedloop" => Self::GasLimitLoop,
            "unprotectedwithdrawal" => Self::UnprotectedWithdrawal,
            "frontrunning" | "frontrun" => Self::FrontRunning,
            "other" => Self::Other,
            _ => return None,
        })
    }
}

/// Severidad de un hallazgo. El orden derivado (`Info < Low < ... <
/// Critical`) sustenta el calculo de `overallSeverity` como maximo.
#[typeshare]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Degrada un escalon (spec.md 4.3 paso 4), saturando en `Info`.
    pub const fn degrade_one_step(self) -> Self {
        match self {
            Severity::Critical => Severity::High,
            Severity::High => Severity::Medium,
            Severity::Medium => Severity::Low,
            Severity::Low => Severity::Info,
            Severity::Info => Severity::Info,
        }
    }
}

/// Confianza cualitativa reportada por un runner individual sobre un hallazgo.
#[typeshare]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FindingConfidence {
    Low,
    Medium,
    High,
}

impl FindingConfidence {
    /// Multiplicador de severidad usado en el calculo de score (spec.md 4.3 paso 5).
    pub const fn score_weight(self) -> f64 {
        match self {
            FindingConfidence::Low => 0.5,
            FindingConfidence::Medium => 1.0,
            FindingConfidence::High => 1.5,
        }
    }
}

/// Ubicacion en codigo fuente asociada a un hallazgo.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: Option<u32>,
    pub file: Option<String>,
}

impl SourceLocation {
    /// Distancia en lineas usada por la deduplicacion (spec.md 4.3 paso 2a).
    pub fn line_distance(&self, other: &SourceLocation) -> u32 {
        self.line.abs_diff(other.line)
    }
}

/// Hallazgo individual reportado por un runner (o fusionado por la consola
/// de consenso, en cuyo caso `agreeing_detectors` registra el conjunto de
/// detectores que coincidieron, spec.md 4.3 paso 2).
#[typeshare]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub confidence: FindingConfidence,
    pub location: Option<SourceLocation>,
    pub detector: String,
    pub evidence: Option<String>,
    /// Conjunto de detectores que coincidieron en este hallazgo tras la
    /// deduplicacion. Contiene unicamente `detector` hasta que la consola
    /// de consenso la fusiona con una o mas observaciones equivalentes.
    #[serde(default = "default_agreeing_detectors")]
    pub agreeing_detectors: Vec<String>,
}

fn default_agreeing_detectors() -> Vec<String> {
    Vec::new()
}

impl Finding {
    /// Numero de detectores distintos que reportaron este hallazgo tras la
    /// deduplicacion (minimo 1: el propio `detector`).
    pub fn detector_count(&self) -> usize {
        self.agreeing_detectors.len().max(1)
    }
}
