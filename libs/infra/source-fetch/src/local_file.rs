// [libs/infra/source-fetch/src/local_file.rs]
//! Lectura de fuente desde disco (spec.md 4.1 "LocalFile"): lee bytes y
//! rechaza contenido no-UTF-8 en lugar de degradarlo silenciosamente.

use crate::error::SourceError;
use hyperforge_domain_models::{ContractMetadata, ContractSource, Provenance};
use std::path::Path;

pub async fn read(path: &Path) -> Result<ContractSource, SourceError> {
    let bytes = tokio::fs::read(path).await?;
    let body = String::from_utf8(bytes).map_err(|e| SourceError::NotUtf8(e.to_string()))?;

    let contract_name = path.file_stem().and_then(|s| s.to_str()).map(str::to_string);

    ContractSource::new(
        body,
        Provenance::LocalFile,
        Some(ContractMetadata { compiler_version: None, contract_name, address: None }),
    )
    .map_err(|e| SourceError::Unavailable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_valid_utf8_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "pragma solidity ^0.8.0; contract C {{}}").unwrap();
        let source = read(file.path()).await.unwrap();
        assert_eq!(source.provenance, Provenance::LocalFile);
        assert_eq!(source.confidence, 1.0);
    }

    #[tokio::test]
    async fn rejects_non_utf8_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x10]).unwrap();
        let result = read(file.path()).await;
        assert!(matches!(result, Err(SourceError::NotUtf8(_))));
    }
}
