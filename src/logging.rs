use crate::Result;
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize JSON structured logging.
///
/// - Level filter comes from `RUST_LOG`, defaulting to "info"
/// - Events are appended to `log_file` when given, otherwise written to stdout
/// - Event fields are flattened into the top-level JSON object
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let builder = fmt()
        .with_env_filter(env_filter())
        .json()
        .flatten_event(true)
        .with_current_span(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.init(),
    }

    install_panic_hook();
    Ok(())
}

/// Route panics through tracing so they end up in the structured log.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_default();
        tracing::error!(%location, %message, "unhandled panic");
    }));
}
