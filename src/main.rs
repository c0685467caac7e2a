use anyhow::{Context, Result};
use tracing::info;

mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use crate::app::App;
use crate::config::AppConfig;
use crate::ui::services::Services;

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    logging::init(&config.log_filter)?;
    let services = Services::http(&config)?;

    info!(api = %config.api_base_url, "starting LYDIAN dashboard");
    launch(services)
}

#[cfg(feature = "desktop")]
fn launch(services: Services) -> Result<()> {
    let webview_data_dir = config::default_webview_data_dir()
        .context("should resolve and create WebView2 data directory")?;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("LYDIAN"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(services)
        .launch(App);
    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch(services: Services) -> Result<()> {
    dioxus::LaunchBuilder::new()
        .with_context(services)
        .launch(App);
    Ok(())
}
