// [apps/cli/src/supplied_args.rs]
//! Traduccion de `--args JSON` / `--file args.json` a la representacion
//! que el resolutor de argumentos de constructor espera (spec.md 4.4).

use crate::error::CliError;
use hyperforge_constructor_resolver::SuppliedArguments;
use std::path::Path;

/// Resuelve la precedencia `--args` > `--file` > ninguno, y clasifica el
/// JSON como posicional (array) o por nombre (objeto).
pub async fn load(args: Option<&str>, file: Option<&Path>) -> Result<SuppliedArguments, CliError> {
    let raw = match (args, file) {
        (Some(inline), _) => inline.to_string(),
        (None, Some(path)) => tokio::fs::read_to_string(path).await?,
        (None, None) => return Ok(SuppliedArguments::None),
    };

    let value: serde_json::Value = serde_json::from_str(&raw)?;
    match value {
        serde_json::Value::Array(items) => Ok(SuppliedArguments::Positional(items)),
        serde_json::Value::Object(map) => Ok(SuppliedArguments::Named(map)),
        other => Err(CliError::InvalidInput(format!(
            "constructor arguments must be a JSON array or object, got {other}"
        ))),
    }
}
