// [libs/core/domain-models/src/deployment.rs]
/*!
 * APARATO: DEPLOYMENT RECORD MODEL
 * RESPONSABILIDAD: Representar una prueba on-chain de despliegue exitoso.
 */

use crate::error::DomainModelError;
use crate::network::NetworkConfig;
use crate::workflow::AbiValue;
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

fn is_hex_of_len(value: &str, byte_len: usize) -> bool {
    value
        .strip_prefix("0x")
        .map(|rest| rest.len() == byte_len * 2 && rest.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// Prueba inmutable de que una transaccion de despliegue fue minada con
/// exito. Invariante (spec.md 3): solo existe para una transaccion cuyo
/// receipt indique exito; una transaccion fallida jamas produce este record.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub transaction_hash: String,
    pub contract_address: String,
    pub network: NetworkConfig,
    pub gas_used: u64,
    pub block_number: u64,
    pub constructor_args: Vec<AbiValue>,
}

impl DeploymentRecord {
    /// Construye un record validando la forma hexadecimal de hash y
    /// direccion (32 y 20 bytes respectivamente, 0x-prefixed). La direccion
    /// se normaliza a minusculas (spec.md 3).
    pub fn new(
        transaction_hash: impl Into<String>,
        contract_address: impl Into<String>,
        network: NetworkConfig,
        gas_used: u64,
        block_number: u64,
        constructor_args: Vec<AbiValue>,
    ) -> Result<Self, DomainModelError> {
        let transaction_hash = transaction_hash.into();
        if !is_hex_of_len(&transaction_hash, 32) {
            return Err(DomainModelError::InvalidTransactionHash(transaction_hash));
        }

        let contract_address = contract_address.into().to_ascii_lowercase();
        if !is_hex_of_len(&contract_address, 20) {
            return Err(DomainModelError::InvalidContractAddress(contract_address));
        }

        Ok(Self {
            transaction_hash,
            contract_address,
            network,
            gas_used,
            block_number,
            constructor_args,
        })
    }
}
