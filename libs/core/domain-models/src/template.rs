// [libs/core/domain-models/src/template.rs]
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Categoria de una plantilla recuperable del almacen de contenido direccionado.
#[typeshare]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    PromptSystem,
    PromptAudit,
    ScaffoldErc20,
    ScaffoldGeneric,
}

/// Plantilla de prompt o de andamiaje de contrato, recuperada de forma
/// perezosa y cacheada localmente bajo un archivo nombrado por `key`
/// (spec.md 3 / 4.7).
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub key: String,
    pub content_bytes: String,
    pub cid: String,
    pub category: TemplateCategory,
}
