// [libs/domain/constructor-resolver/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CONSTRUCTOR ARGUMENT RESOLVER (V1.0)
 * CLASIFICACION: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: PRODUCIR UNA LISTA DE ARGUMENTOS DE CONSTRUCTOR
 * CORRECTAMENTE TIPADA Y ORDENADA, O FALLAR ANTES DE INVOCAR AL DEPLOYER
 *
 * Cruza la extraccion de parametros del ABI compilado con la extraccion
 * independiente del codigo fuente (spec.md 4.4 pasos 1-2); cualquier
 * discrepancia de aridad o tipo es fatal (`ConstructorMismatch`). Ningun
 * camino de este componente produce un despliegue con argumentos
 * incorrectos de forma silenciosa.
 * =================================================================
 */

pub mod abi_extract;
pub mod coerce;
pub mod error;
pub mod resolver;
pub mod source_extract;

pub use abi_extract::{canonical_signature, extract_from_abi, ConstructorParam};
pub use error::ResolverError;
pub use resolver::{resolve, ResolvedConstructor, SuppliedArguments};
