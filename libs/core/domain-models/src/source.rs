// [libs/core/domain-models/src/source.rs]
/*!
 * APARATO: CONTRACT SOURCE MODEL
 * RESPONSABILIDAD: Representar el origen y confianza de un fuente Solidity.
 */

use crate::error::DomainModelError;
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Origen de procedencia de un `ContractSource`. Determina la confianza
/// inicial antes de cualquier ajuste de la consola de auditoria.
#[typeshare]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    LocalFile,
    ExplorerVerified,
    SourcifyVerified,
    BytecodeDecompiled,
    LLMGenerated,
}

impl Provenance {
    /// Confianza nominal asociada a cada procedencia (spec.md 3).
    pub const fn base_confidence(self) -> f64 {
        match self {
            Provenance::LocalFile => 1.0,
            Provenance::ExplorerVerified => 0.95,
            Provenance::SourcifyVerified => 0.90,
            Provenance::LLMGenerated => 0.85,
            Provenance::BytecodeDecompiled => 0.30,
        }
    }
}

/// Metadatos opcionales adjuntos a un `ContractSource` verificado.
#[typeshare]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    pub compiler_version: Option<String>,
    pub contract_name: Option<String>,
    pub address: Option<String>,
}

/// Fuente Solidity candidata para auditoria y despliegue.
///
/// Invariante: una vez producido por el adaptador de origen o la etapa LLM,
/// es inmutable. El campo `confidence` refleja la procedencia en el momento
/// de creacion; la consola de auditoria lo usa como insumo, nunca lo muta.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractSource {
    pub body: String,
    pub provenance: Provenance,
    pub confidence: f64,
    pub metadata: Option<ContractMetadata>,
}

impl ContractSource {
    /// Construye una fuente nueva, derivando la confianza nominal desde la
    /// procedencia. Falla si el cuerpo esta vacio (invariante de spec.md 3).
    pub fn new(
        body: impl Into<String>,
        provenance: Provenance,
        metadata: Option<ContractMetadata>,
    ) -> Result<Self, DomainModelError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(DomainModelError::EmptySource);
        }

        Ok(Self {
            body,
            provenance,
            confidence: provenance.base_confidence(),
            metadata,
        })
    }

    /// Atajo usado tras la degradacion de confianza por revisiones de
    /// auditoria externas (no usado por el flujo estandar, expuesto para
    /// pruebas de `consensus`/`resolver` que simulan procedencias debiles).
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn is_low_trust(&self) -> bool {
        self.confidence < 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_body() {
        let result = ContractSource::new("   ", Provenance::LocalFile, None);
        assert_eq!(result.unwrap_err(), DomainModelError::EmptySource);
    }

    #[test]
    fn derives_confidence_from_provenance() {
        let source =
            ContractSource::new("pragma solidity ^0.8.0; contract C {}", Provenance::ExplorerVerified, None)
                .unwrap();
        assert_eq!(source.confidence, 0.95);
        assert!(!source.is_low_trust());
    }

    #[test]
    fn bytecode_decompiled_is_low_trust() {
        let source = ContractSource::new("// decompiled", Provenance::BytecodeDecompiled, None).unwrap();
        assert!(source.is_low_trust());
    }
}
