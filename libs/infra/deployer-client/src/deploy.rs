// [libs/infra/deployer-client/src/deploy.rs]
//! Invocacion del subproceso compilador/deployer y reconciliacion del
//! resultado contra un `DeploymentRecord` (spec.md 4.5). Ausencia de
//! toolchain jamas se disfraza de exito: un binario no resuelto en PATH
//! aborta con `ToolchainMissing` antes de intentar spawnear nada.

use crate::abi_arg::abi_value_to_arg;
use crate::error::DeployError;
use crate::rpc_verify::has_deployed_code;
use crate::workspace::BuildWorkspace;
use hyperforge_domain_models::{AbiValue, DeploymentRecord, NetworkConfig, RunId};
use reqwest::Client;
use serde::Deserialize;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{instrument, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub deployer_binary: String,
    pub build_artifacts_dir: String,
    pub run_id: RunId,
    pub source_body: String,
    pub constructor_args: Vec<AbiValue>,
    pub network: NetworkConfig,
    pub deployer_private_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct DeployerToolOutput {
    tx: String,
    address: String,
    #[serde(rename = "gasUsed")]
    gas_used: u64,
    block: u64,
}

fn classify_stderr(stderr: &str) -> Option<DeployError> {
    let lowered = stderr.to_ascii_lowercase();
    if lowered.contains("insufficient funds") {
        Some(DeployError::InsufficientFunds(stderr.to_string()))
    } else if lowered.contains("connection refused") || lowered.contains("could not connect") || lowered.contains("network is unreachable") {
        Some(DeployError::NetworkUnreachable(stderr.to_string()))
    } else if lowered.contains("error") || lowered.contains("compilererror") {
        Some(DeployError::CompileError(stderr.to_string()))
    } else {
        None
    }
}

fn extract_from_human_readable(stdout: &str) -> Option<DeployerToolOutput> {
    let tx = stdout.lines().find_map(|line| line.split_once("Transaction hash:").map(|(_, v)| v.trim().to_string()));
    let address = stdout.lines().find_map(|line| line.split_once("Deployed to:").map(|(_, v)| v.trim().to_string()));
    let gas_used = stdout
        .lines()
        .find_map(|line| line.split_once("Gas used:").map(|(_, v)| v.trim().parse::<u64>().ok()))
        .flatten();
    let block = stdout
        .lines()
        .find_map(|line| line.split_once("Block:").map(|(_, v)| v.trim().parse::<u64>().ok()))
        .flatten();

    match (tx, address, gas_used, block) {
        (Some(tx), Some(address), Some(gas_used), Some(block)) => Some(DeployerToolOutput { tx, address, gas_used, block }),
        _ => None,
    }
}

/// Ejecuta el protocolo completo de despliegue (spec.md 4.5 pasos 1-5):
/// workspace aislado, subproceso con higiene UTF-8, parseo de resultado,
/// y verificacion on-chain del bytecode antes de devolver el record.
#[instrument(skip(client, request), fields(binary = %request.deployer_binary))]
pub async fn deploy(client: &Client, request: &DeployRequest) -> Result<DeploymentRecord, DeployError> {
    which::which(&request.deployer_binary).map_err(|_| DeployError::ToolchainMissing {
        binary: request.deployer_binary.clone(),
        install_hint: format!("install `{}` and ensure it is on PATH", request.deployer_binary),
    })?;

    let workspace = BuildWorkspace::prepare(&request.build_artifacts_dir, &request.run_id, &request.source_body).await?;

    let mut args: Vec<String> = vec![workspace.contract_path.to_string_lossy().into_owned()];
    args.extend(request.constructor_args.iter().map(abi_value_to_arg));
    args.push(request.network.rpc_url.clone());
    args.push(request.network.chain_id.to_string());
    args.push(request.deployer_private_key.clone());

    let mut child = Command::new(&request.deployer_binary)
        .args(&args)
        .env("PYTHONIOENCODING", "utf-8")
        .env("LC_ALL", "C.UTF-8")
        .env("LANG", "C.UTF-8")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let output = tokio::time::timeout(request.timeout, child.wait_with_output())
        .await
        .map_err(|_| DeployError::Timeout(request.timeout))??;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    // spec.md 6: "Non-zero exit code always indicates failure and MUST be
    // treated as such regardless of stdout content" -- a non-zero status is
    // checked before any stdout is trusted, even if it happens to parse.
    if !output.status.success() {
        if let Some(classified) = classify_stderr(&stderr) {
            return Err(classified);
        }
        return Err(DeployError::CompileError(format!(
            "deployer exited with {}: stdout={stdout:?} stderr={stderr:?}",
            output.status
        )));
    }

    let parsed = serde_json::from_str::<DeployerToolOutput>(stdout.trim())
        .ok()
        .or_else(|| extract_from_human_readable(&stdout));

    let tool_output = match parsed {
        Some(tool_output) => tool_output,
        None => {
            if let Some(classified) = classify_stderr(&stderr) {
                return Err(classified);
            }
            return Err(DeployError::MalformedOutput(format!(
                "deployer produced neither JSON nor recognizable output: stdout={stdout:?} stderr={stderr:?}"
            )));
        }
    };

    if !has_deployed_code(client, &request.network.rpc_url, &tool_output.address).await? {
        warn!(address = %tool_output.address, "deployer reported success but chain has no code at address");
        return Err(DeployError::DeploymentUnverified(format!(
            "no bytecode found at {} after deployment reported success",
            tool_output.address
        )));
    }

    DeploymentRecord::new(
        tool_output.tx,
        tool_output.address,
        request.network.clone(),
        tool_output.gas_used,
        tool_output.block,
        request.constructor_args.clone(),
    )
    .map_err(|e| DeployError::MalformedOutput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_insufficient_funds() {
        let err = classify_stderr("Error: insufficient funds for gas * price + value");
        assert!(matches!(err, Some(DeployError::InsufficientFunds(_))));
    }

    #[test]
    fn classifies_network_unreachable() {
        let err = classify_stderr("dial tcp: connection refused");
        assert!(matches!(err, Some(DeployError::NetworkUnreachable(_))));
    }

    #[test]
    fn parses_human_readable_fallback() {
        let stdout = "Deploying...\nTransaction hash: 0xabc\nDeployed to: 0xdef\nGas used: 21000\nBlock: 42\n";
        let parsed = extract_from_human_readable(stdout).unwrap();
        assert_eq!(parsed.tx, "0xabc");
        assert_eq!(parsed.gas_used, 21000);
    }
}
