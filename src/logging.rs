use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// One-shot mode
    Stderr,
    /// Interactive mode with `--log-file`
    File { path: &'a Path, json: bool },
    /// Interactive mode without a log file; the terminal belongs to the UI
    Off,
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "storefront_search=debug"
    } else {
        "storefront_search=info"
    }
}

pub fn init_tracing(target: LogTarget<'_>, verbose: bool) -> Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(verbose).into())
    };

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter())
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        LogTarget::File { path, json } => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false);
            if json {
                tracing_subscriber::registry()
                    .with(filter())
                    .with(layer.json())
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter())
                    .with(layer)
                    .init();
            }
        }
    }
    Ok(())
}
