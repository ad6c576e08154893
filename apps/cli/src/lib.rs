// [apps/cli/src/lib.rs]
/*!
 * APARATO: HYPERFORGE CLI LIBRARY SURFACE
 * RESPONSABILIDAD: Exponer los modulos del binario `hyperforge` como una
 * libreria, para que la matriz de pruebas de integracion de nivel de
 * workspace pueda ejercer el orquestador, la puerta de politica y el
 * renderizado de reportes sin reimplementarlos.
 */

pub mod abi_encode;
pub mod artifacts;
pub mod cli;
pub mod error;
pub mod orchestrator;
pub mod policy;
pub mod providers;
pub mod report;
pub mod supplied_args;
