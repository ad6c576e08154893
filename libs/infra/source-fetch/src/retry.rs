// [libs/infra/source-fetch/src/retry.rs]
//! Politica de reintento: hasta 3 intentos con backoff exponencial y
//! jitter para errores de red; un 404 es terminal (spec.md 4.1).

use rand::Rng;
use std::time::Duration;
use tracing::warn;

pub const MAX_ATTEMPTS: u32 = 3;

/// Marca si un fallo es terminal (no reintentable, p.ej. HTTP 404) o
/// transitorio (reintentable con backoff).
pub enum Attempt<T> {
    Terminal(T),
    Transient(T),
}

fn backoff_with_jitter(attempt: u32) -> Duration {
    let base_millis = 200u64 * 2u64.saturating_pow(attempt);
    let jitter_millis = rand::thread_rng().gen_range(0..=100);
    Duration::from_millis(base_millis + jitter_millis)
}

/// Ejecuta `operation` hasta `MAX_ATTEMPTS` veces, esperando un backoff
/// exponencial con jitter entre intentos transitorios. Un `Attempt::Terminal`
/// interrumpe el reintento de inmediato.
pub async fn with_retry<T, E, F, Fut>(mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, Attempt<E>>>,
{
    let mut last_error = None;

    for attempt in 0..MAX_ATTEMPTS {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(Attempt::Terminal(error)) => return Err(error),
            Err(Attempt::Transient(error)) => {
                warn!(attempt, "transient source-fetch error, will retry");
                last_error = Some(error);
                if attempt + 1 < MAX_ATTEMPTS {
                    tokio::time::sleep(backoff_with_jitter(attempt)).await;
                }
            }
        }
    }

    Err(last_error.expect("at least one attempt runs before exhausting retries"))
}
