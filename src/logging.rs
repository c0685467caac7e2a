use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG` wins over the configured
/// filter when it is set.
pub fn init(filter: &str) -> Result<()> {
    let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

/// A parseable environment directive takes precedence; otherwise the
/// configured fallback must parse.
fn build_filter(env_directives: Option<String>, fallback: &str) -> Result<EnvFilter> {
    if let Some(filter) = env_directives.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).with_context(|| format!("invalid log filter: {fallback}"))
}
