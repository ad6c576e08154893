// [libs/infra/explorer-client/src/poll.rs]
//! Sondeo del estado de verificacion con backoff exponencial, tope de 30s
//! entre intentos y limite total de 5 minutos (spec.md 4.6 paso 3).

use crate::error::VerifyError;
use crate::verdict::VerificationOutcome;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, instrument};

const INITIAL_INTERVAL: Duration = Duration::from_secs(1);
const MAX_INTERVAL: Duration = Duration::from_secs(30);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(5 * 60);

#[derive(Deserialize)]
struct StatusResponse {
    status: String,
}

fn next_interval(current: Duration) -> Duration {
    (current * 2).min(MAX_INTERVAL)
}

#[instrument(skip(client))]
pub async fn poll_until_terminal(client: &Client, base_url: &str, guid: &str, api_key: Option<&str>) -> Result<VerificationOutcome, VerifyError> {
    let url = format!("{}/api/v2/smart-contracts/verification/{guid}", base_url.trim_end_matches('/'));
    let started = Instant::now();
    let mut interval = INITIAL_INTERVAL;

    loop {
        if started.elapsed() >= TOTAL_TIMEOUT {
            return Ok(VerificationOutcome::Timeout);
        }

        let mut request = client.get(&url);
        if let Some(key) = api_key {
            request = request.query(&[("apikey", key)]);
        }

        let payload: StatusResponse = request.send().await?.json().await?;

        match payload.status.as_str() {
            "Verified" => return Ok(VerificationOutcome::Verified),
            "AlreadyVerified" => return Ok(VerificationOutcome::AlreadyVerified),
            "Pending" => {
                info!(guid, ?interval, "verification still pending, backing off");
                tokio::time::sleep(interval).await;
                interval = next_interval(interval);
            }
            other if other.starts_with("Failed:") => {
                let reason = other.trim_start_matches("Failed:").trim().to_string();
                return Ok(VerificationOutcome::Mismatch(reason));
            }
            other => return Err(VerifyError::SubmissionRejected(format!("unrecognized status {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_doubles_up_to_cap() {
        let mut interval = INITIAL_INTERVAL;
        let expected = [2, 4, 8, 16, 30, 30];
        for secs in expected {
            interval = next_interval(interval);
            assert_eq!(interval, Duration::from_secs(secs));
        }
    }
}
