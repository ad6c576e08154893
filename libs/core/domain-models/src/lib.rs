// [libs/core/domain-models/src/lib.rs]
/*!
 * =================================================================
 * APARATO: HYPERFORGE DOMAIN MODEL CATALOG (V1.0)
 * CLASIFICACION: CORE CONTRACT (ESTRATO L1)
 * RESPONSABILIDAD: DEFINICION DE LAS ENTIDADES SOBERANAS DEL PIPELINE
 *
 * Contiene las entidades que atraviesan todas las etapas del workflow:
 * ContractSource, Finding, AuditVerdict, DeploymentRecord, WorkflowState
 * y Template. Ninguna entidad muta fuera de su etapa productora; cada
 * stage escribe su artefacto y lo entrega inmutable al siguiente.
 * =================================================================
 */

pub mod deployment;
pub mod error;
pub mod finding;
pub mod network;
pub mod run_id;
pub mod source;
pub mod template;
pub mod verdict;
pub mod workflow;

pub use deployment::DeploymentRecord;
pub use error::DomainModelError;
pub use finding::{Finding, FindingConfidence, FindingKind, Severity, SourceLocation};
pub use network::NetworkConfig;
pub use run_id::RunId;
pub use source::{ContractMetadata, ContractSource, Provenance};
pub use template::{Template, TemplateCategory};
pub use verdict::AuditVerdict;
pub use workflow::{AbiValue, ArtifactRef, ErrorRecord, Stage, WorkflowState};
