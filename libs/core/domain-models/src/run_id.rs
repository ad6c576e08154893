// [libs/core/domain-models/src/run_id.rs]
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador unico de una ejecucion de workflow, usado como nombre del
/// directorio de artefactos `artifacts/workflows/<run_id>/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Genera un nuevo identificador aleatorio (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for RunId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
