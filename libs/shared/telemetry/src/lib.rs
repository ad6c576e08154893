// [libs/shared/telemetry/src/lib.rs]
/*!
 * APARATO: TELEMETRY INIT
 * RESPONSABILIDAD: Arranque del suscriptor de trazado y blindaje de panicos
 * para los binarios del pipeline.
 *
 * Desarrollo: salida compacta coloreada. Produccion: JSON plano, una linea
 * por evento, apto para un recolector externo.
 */

use std::panic;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa tracing-subscriber con un filtro por variable de entorno
/// (`RUST_LOG`), cayendo a un default scoped al `service_name` dado, y
/// registra un panic hook que deja un ultimo rastro estructurado antes de
/// que el proceso muera.
///
/// # Panics
/// Entra en panico si ya existe un suscriptor global instalado en este
/// proceso (comportamiento estandar de `tracing_subscriber::util::SubscriberInitExt`).
pub fn init_tracing(service_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
        format!("{service_name}={default_level},reqwest=warn,hyper=warn").into()
    });

    if cfg!(debug_assertions) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().flatten_event(true))
            .init();
    }

    install_panic_hook(service_name);

    info!("telemetry online for '{service_name}'");
}

fn install_panic_hook(service_name: &str) {
    let service_name = service_name.to_string();

    panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");

        error!(
            target: "panic",
            service = %service_name,
            location = %location,
            "process panicked: {payload}"
        );
    }));
}

#[cfg(test)]
mod tests {
    // init_tracing installs a global subscriber; running it more than once
    // per process panics, so it is exercised manually in the CLI binaries
    // rather than under the test harness.
}
