// [libs/core/domain-models/src/network.rs]
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Identificador de red EVM destino: chainId y endpoint RPC configurados
/// (spec.md 3 y 4.5 — el pipeline opera contra una unica red a la vez,
/// la postura "Hyperion-only" del sistema).
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub rpc_url: String,
    pub label: String,
}

impl NetworkConfig {
    pub fn new(chain_id: u64, rpc_url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            chain_id,
            rpc_url: rpc_url.into(),
            label: label.into(),
        }
    }
}
