// [libs/infra/explorer-client/src/lib.rs]
/*!
 * APARATO: EXPLORER VERIFICATION ADAPTER
 * RESPONSABILIDAD: Someter fuente verificada al block-explorer y sondear
 * el estado hasta un desenlace terminal (spec.md 4.6).
 */

mod error;
mod poll;
mod submit;
mod verdict;

pub use error::VerifyError;
pub use poll::poll_until_terminal;
pub use submit::{submit, SubmissionRequest};
pub use verdict::VerificationOutcome;
