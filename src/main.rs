//! batnotify — low-battery warning popup for X11.
//!
//! Run with:  `RUST_LOG=info batnotify`

use anyhow::Result;
use batnotify_config::PopupConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("batnotify v{} starting", env!("CARGO_PKG_VERSION"));

    let path   = batnotify_config::default_path();
    let config = batnotify_config::load(&path).unwrap_or_else(|e| {
        tracing::warn!("{e}; using built-in defaults");
        PopupConfig::default()
    });

    // Single thread: the X display handles never leave it.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let summary = runtime.block_on(batnotify_x11::run(&config))?;
    tracing::info!(
        "AC restored; popup shown for {} ticks, {} redraws",
        summary.ticks,
        summary.redraws
    );

    Ok(())
}
