// [libs/infra/explorer-client/src/verdict.rs]
use serde::{Deserialize, Serialize};

/// Desenlace terminal de la verificacion (spec.md 4.6 paso 4).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum VerificationOutcome {
    Verified,
    AlreadyVerified,
    Mismatch(String),
    Timeout,
}
