// [libs/infra/source-fetch/src/lib.rs]
/*!
 * APARATO: SOURCE-FETCH ADAPTER
 * RESPONSABILIDAD: Resolver un identificador de entrada (path, direccion,
 * fuente cruda) a un `ContractSource` con procedencia y confianza
 * correctas, siguiendo la cadena de respaldo de spec.md 4.1.
 */

mod bytecode_source;
mod error;
mod explorer_source;
mod fetcher;
mod identifier;
mod local_file;
mod retry;

pub use error::SourceError;
pub use fetcher::{fetch, FetchEndpoints};
pub use identifier::{extract_address_from_url_or_literal, SourceIdentifier};
