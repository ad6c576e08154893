// [libs/core/domain-models/src/workflow.rs]
/*!
 * APARATO: WORKFLOW STATE MACHINE MODEL
 * RESPONSABILIDAD: Representar la maquina de estados total-ordenada del
 * pipeline (spec.md 3 / 4.9) y el catalogo de valores ABI tipados usados
 * como argumentos de constructor.
 */

use crate::run_id::RunId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use typeshare::typeshare;

/// Etapa actual de una ejecucion de workflow. El orden de declaracion es el
/// orden total exigido por spec.md 4.9 — las transiciones solo avanzan.
#[typeshare]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Init,
    Generating,
    Auditing,
    PolicyGate,
    Resolving,
    Deploying,
    Verifying,
    Testing,
    Done,
    Failed,
}

impl Stage {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }

    /// La etapa siguiente en el orden feliz (no usada para `Failed`, que es
    /// alcanzable desde cualquier etapa per spec.md 4.9).
    pub const fn next_on_success(self) -> Option<Stage> {
        match self {
            Stage::Init => Some(Stage::Generating),
            Stage::Generating => Some(Stage::Auditing),
            Stage::Auditing => Some(Stage::PolicyGate),
            Stage::PolicyGate => Some(Stage::Resolving),
            Stage::Resolving => Some(Stage::Deploying),
            Stage::Deploying => Some(Stage::Verifying),
            Stage::Verifying => Some(Stage::Testing),
            Stage::Testing => Some(Stage::Done),
            Stage::Done | Stage::Failed => None,
        }
    }
}

/// Valor tipado de argumento de constructor, independiente del codec ABI
/// concreto usado aguas abajo (el resolver/deployer lo traducen a su
/// representacion de codificacion real).
#[typeshare]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AbiValue {
    Address(String),
    Uint(String),
    Int(String),
    Bool(bool),
    String(String),
    Bytes(String),
}

/// Registro de error append-only adjunto al `WorkflowState` (spec.md 3 / 7).
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub kind: String,
    pub message: String,
    pub remediation: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorRecord {
    pub fn new(kind: impl Into<String>, message: impl Into<String>, remediation: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            remediation,
            occurred_at: Utc::now(),
        }
    }
}

/// Referencia liviana a un artefacto persistido en disco (no el blob en si),
/// para mantener `WorkflowState` serializable y compacto.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub path: String,
}

impl ArtifactRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Estado completo de una ejecucion de workflow (spec.md 3 / 4.9).
///
/// Invariante: las transiciones de `stage` son total-ordenadas y solo
/// avanzan; alcanzar `Done` exige que cada etapa previa tenga un artefacto
/// de exito; cualquier etapa puede transicionar a `Failed`.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub run_id: RunId,
    pub stage: Stage,
    pub artifacts: BTreeMap<String, ArtifactRef>,
    pub errors: Vec<ErrorRecord>,
    pub bypassed_stages: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkflowState {
    pub fn new(run_id: RunId) -> Self {
        let now = Utc::now();
        Self {
            run_id,
            stage: Stage::Init,
            artifacts: BTreeMap::new(),
            errors: Vec::new(),
            bypassed_stages: Vec::new(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Avanza la etapa, rechazando cualquier intento de retroceder o de
    /// saltar un escalon del orden total (spec.md 3: "stage transitions are
    /// total-ordered and forward-only"). `Failed` es siempre aceptado.
    pub fn transition_to(&mut self, next: Stage) -> Result<(), String> {
        if next == Stage::Failed || next > self.stage {
            self.stage = next;
            self.updated_at = Utc::now();
            Ok(())
        } else {
            Err(format!(
                "illegal transition: {:?} -> {:?} is not forward-only",
                self.stage, next
            ))
        }
    }

    pub fn record_artifact(&mut self, stage: Stage, artifact: ArtifactRef) {
        self.artifacts.insert(format!("{:?}", stage), artifact);
        self.updated_at = Utc::now();
    }

    pub fn record_error(&mut self, error: ErrorRecord) {
        self.errors.push(error);
        self.updated_at = Utc::now();
    }

    pub fn record_bypass(&mut self, flag: impl Into<String>) {
        self.bypassed_stages.push(flag.into());
    }
}
