// [libs/infra/template-store/src/store.rs]
//! Recuperacion de plantillas por clave: cache local primero, luego la
//! puerta de enlace remota de contenido direccionado (spec.md 4.7). La
//! escritura de cache usa write-to-temp + rename para evitar archivos a
//! medio escribir bajo lectura concurrente (spec.md 5 "shared-resource
//! policy").

use crate::error::TemplateError;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub struct TemplateStore {
    client: Client,
    cache_dir: PathBuf,
    gateway_base_url: String,
}

impl TemplateStore {
    pub fn new(client: Client, cache_dir: impl Into<PathBuf>, gateway_base_url: impl Into<String>) -> Self {
        Self {
            client,
            cache_dir: cache_dir.into(),
            gateway_base_url: gateway_base_url.into(),
        }
    }

    fn cache_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(name)
    }

    /// Recupera la plantilla `name`. No hay invalidacion automatica: una vez
    /// cacheada localmente, siempre se sirve desde disco hasta que alguien
    /// borre el archivo manualmente (spec.md 4.7 "Cache invalidation is
    /// manual").
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<String, TemplateError> {
        let cache_path = self.cache_path(name);
        if let Ok(body) = tokio::fs::read_to_string(&cache_path).await {
            info!(name, "template served from local cache");
            return Ok(body);
        }

        let url = format!("{}/{}", self.gateway_base_url.trim_end_matches('/'), name);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(TemplateError::Unavailable(format!("{name} not found at gateway (HTTP {})", response.status())));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(TemplateError::Unavailable(format!("{name} resolved to an empty body")));
        }

        self.write_cache_atomically(&cache_path, &body).await?;
        Ok(body)
    }

    async fn write_cache_atomically(&self, final_path: &Path, body: &str) -> Result<(), TemplateError> {
        tokio::fs::create_dir_all(&self.cache_dir).await?;
        let temp_path = final_path.with_extension("tmp");
        tokio::fs::write(&temp_path, body).await?;
        tokio::fs::rename(&temp_path, final_path).await?;
        Ok(())
    }
}
