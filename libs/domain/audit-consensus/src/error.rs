// [libs/domain/audit-consensus/src/error.rs]
use thiserror::Error;

/// La consola de consenso nunca falla en producto (spec.md 4.3: "the engine
/// itself never fails"); este enum existe solo para que los llamadores
/// envuelvan condiciones de entrada invalidas antes de invocarla (p.ej. un
/// `source_confidence` fuera de [0,1]).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsensusError {
    #[error("[CONSENSUS_FAULT]: SOURCE_CONFIDENCE_OUT_OF_RANGE -> {0}")]
    SourceConfidenceOutOfRange(f64),
}
