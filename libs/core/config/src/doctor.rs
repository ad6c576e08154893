// [libs/core/config/src/doctor.rs]
/*!
 * APARATO: PREFLIGHT DOCTOR PROBE
 * RESPONSABILIDAD: Convertir un `ToolchainMissing` profundo en el arbol de
 * estados en una falla de precondicion temprana (spec.md 9:
 * "External-tool availability -> probe-on-startup").
 */

use crate::error::ConfigError;
use crate::HyperforgeConfig;
use tracing::{info, warn};

/// Resultado de una sonda individual, para reporte legible via `limitations`/`context`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

/// Ejecuta todas las sondas aplicables a la configuracion cargada. No hace
/// llamadas de red (eso vive en el adaptador de despliegue); unicamente
/// verifica presencia de binarios y forma sintactica de URLs.
pub fn run_doctor(config: &HyperforgeConfig, require_deployer_binary: bool) -> Vec<ProbeReport> {
    let mut reports = Vec::new();

    reports.push(probe_rpc_url_shape(&config.network.rpc_url));

    if require_deployer_binary {
        reports.push(probe_deployer_binary(&config.deployer_binary));
    }

    for report in &reports {
        if report.ok {
            info!("doctor probe OK: {} ({})", report.name, report.detail);
        } else {
            warn!("doctor probe FAILED: {} ({})", report.name, report.detail);
        }
    }

    reports
}

/// Falla duro si alguna sonda obligatoria fallo, convirtiendo la primera
/// falla en un `ConfigError::DoctorProbeFailed`.
pub fn require_all_ok(reports: &[ProbeReport]) -> Result<(), ConfigError> {
    if let Some(failed) = reports.iter().find(|r| !r.ok) {
        return Err(ConfigError::DoctorProbeFailed(format!("{}: {}", failed.name, failed.detail)));
    }
    Ok(())
}

fn probe_rpc_url_shape(rpc_url: &str) -> ProbeReport {
    let ok = rpc_url.starts_with("http://") || rpc_url.starts_with("https://") || rpc_url.starts_with("ws");
    ProbeReport {
        name: "rpc_url_shape".to_string(),
        ok,
        detail: if ok {
            rpc_url.to_string()
        } else {
            format!("does not look like an RPC endpoint: {rpc_url}")
        },
    }
}

fn probe_deployer_binary(binary_name: &str) -> ProbeReport {
    match which::which(binary_name) {
        Ok(path) => ProbeReport {
            name: "deployer_binary".to_string(),
            ok: true,
            detail: path.display().to_string(),
        },
        Err(_) => ProbeReport {
            name: "deployer_binary".to_string(),
            ok: false,
            detail: format!(
                "'{binary_name}' not found on PATH. Install Foundry: curl -L https://foundry.paradigm.xyz | bash && foundryup"
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_rpc_shape() {
        let report = probe_rpc_url_shape("not-a-url");
        assert!(!report.ok);
    }

    #[test]
    fn accepts_http_rpc_shape() {
        let report = probe_rpc_url_shape("https://hyperion.rpc.example/v1");
        assert!(report.ok);
    }

    #[test]
    fn missing_binary_is_reported_with_install_hint() {
        let report = probe_deployer_binary("definitely-not-a-real-binary-xyz");
        assert!(!report.ok);
        assert!(report.detail.contains("foundryup"));
    }
}
