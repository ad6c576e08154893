// [libs/infra/llm-client/src/lib.rs]
/*!
 * APARATO: LLM GENERATION CLIENT
 * RESPONSABILIDAD: Componer el prompt de generacion y sanear la respuesta
 * del proveedor externo, con reintento acotado (spec.md 4.8).
 */

mod error;
mod http_provider;
mod prompt;
mod provider;
mod sanitize;

pub use error::LLMError;
pub use http_provider::HttpLlmProvider;
pub use prompt::{compose_prompt, PromptContext};
pub use provider::{generate, GenerationProvider, MAX_ATTEMPTS};
pub use sanitize::{looks_like_solidity, strip_code_fences};
