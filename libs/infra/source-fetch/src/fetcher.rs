// [libs/infra/source-fetch/src/fetcher.rs]
//! Orquestador de la cadena de respaldo del adaptador de origen (spec.md
//! 4.1): LocalFile (si `identifier` resuelve a un path) -> ExplorerVerified
//! -> SourcifyVerified -> BytecodeDecompiled. Se detiene en el primer
//! proveedor que produce una fuente; falla solo si los cuatro se agotan.

use crate::bytecode_source::fetch_bytecode;
use crate::error::SourceError;
use crate::explorer_source::{fetch_explorer_verified, fetch_sourcify_verified};
use crate::identifier::{extract_address_from_url_or_literal, SourceIdentifier};
use crate::local_file;
use hyperforge_domain_models::ContractSource;
use reqwest::Client;
use tracing::{info, instrument};

/// Puntos finales y credenciales necesarios para resolver un `SourceIdentifier`
/// de tipo `Address` a traves de la cadena completa de respaldo.
#[derive(Debug, Clone)]
pub struct FetchEndpoints {
    pub explorer_base_url: String,
    pub explorer_api_key: Option<String>,
    pub sourcify_base_url: String,
    pub rpc_url: String,
    pub chain_id: u64,
}

/// Resuelve un `SourceIdentifier` a un `ContractSource`, probando cada
/// procedencia en orden decreciente de confianza hasta que una tenga exito.
#[instrument(skip(client, endpoints))]
pub async fn fetch(
    client: &Client,
    endpoints: &FetchEndpoints,
    identifier: &SourceIdentifier,
) -> Result<ContractSource, SourceError> {
    match identifier {
        SourceIdentifier::LocalFile(path) => local_file::read(path).await,
        SourceIdentifier::RawSource(body) => hyperforge_domain_models::ContractSource::new(
            body.clone(),
            hyperforge_domain_models::Provenance::LocalFile,
            None,
        )
        .map_err(|e| SourceError::Unavailable(e.to_string())),
        SourceIdentifier::Address(raw) => {
            let address = extract_address_from_url_or_literal(raw)
                .ok_or_else(|| SourceError::Unavailable(format!("could not resolve an address from {raw}")))?;

            if let Some(source) =
                fetch_explorer_verified(client, &endpoints.explorer_base_url, endpoints.explorer_api_key.as_deref(), &address)
                    .await?
            {
                info!(%address, "source resolved via explorer");
                return Ok(source);
            }

            if let Some(source) =
                fetch_sourcify_verified(client, &endpoints.sourcify_base_url, endpoints.chain_id, &address).await?
            {
                info!(%address, "source resolved via Sourcify");
                return Ok(source);
            }

            info!(%address, "falling back to bytecode");
            fetch_bytecode(client, &endpoints.rpc_url, &address).await
        }
    }
}
