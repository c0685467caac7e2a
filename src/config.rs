use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use reqwest::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8008/";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const API_URL_VAR: &str = "LYDIAN_API_URL";
pub const LOG_VAR: &str = "LYDIAN_LOG";
pub const TIMEOUT_VAR: &str = "LYDIAN_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Always ends with `/`.
    pub api_base_url: String,
    pub log_filter: String,
    /// `None` leaves requests without a deadline.
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match non_blank(lookup(API_URL_VAR)) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_URL.to_string(),
        };
        let log_filter =
            non_blank(lookup(LOG_VAR)).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let request_timeout = match non_blank(lookup(TIMEOUT_VAR)) {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("{TIMEOUT_VAR} must be whole seconds, got {raw:?}"))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_base_url,
            log_filter,
            request_timeout,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let mut url = Url::parse(raw).with_context(|| format!("invalid {API_URL_VAR}: {raw}"))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("{API_URL_VAR} cannot be used as a base url: {raw}"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.to_string())
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("io", "lydian", "lydian-dashboard")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
