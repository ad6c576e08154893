// [libs/domain/audit-consensus/src/lib.rs]
/*!
 * =================================================================
 * APARATO: AUDIT CONSENSUS ENGINE (V1.0)
 * CLASIFICACION: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: FUSIONAR Findings DE MULTIPLES RUNNERS EN UN
 * UNICO AuditVerdict CON SEVERIDAD, SCORE Y CONFIANZA
 *
 * Algoritmo exacto de spec.md 4.3: deduplicacion cruzada (`dedup`),
 * filtro de consenso por acuerdo entre detectores, degradacion de
 * severidad por procedencia de baja confianza, y calculo independiente
 * de score/confianza agregados (`engine`). El motor nunca falla: la
 * ausencia total de runners produce el veredicto "desconocido"
 * documentado, no un error.
 * =================================================================
 */

pub mod dedup;
pub mod engine;
pub mod error;

pub use dedup::deduplicate;
pub use engine::build_verdict;
pub use error::ConsensusError;
