// src/logging.rs
use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a JSON tracing subscriber filtered by `RUST_LOG` plus `default_directive`.
///
/// Fails instead of panicking when a global subscriber is already installed.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let directive = default_directive
        .parse()
        .with_context(|| format!("Invalid log directive: {}", default_directive))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::from_default_env().add_directive(directive))
        .try_init()
        .context("Failed to install tracing subscriber")
}
