use crate::source::{FetchOptions, DEFAULT_PARAM_NAME};
use crate::view::Crs;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Remote fetch parameters (optional `[fetch]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds; unset leaves it to the transport.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Maximum number of redirects followed.
    pub max_redirections: u32,
    /// Optional cap on the response body size in bytes.
    #[serde(default)]
    pub max_body_bytes: Option<u64>,
    /// Optional User-Agent header.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let o = FetchOptions::default();
        Self {
            connect_timeout_secs: o.connect_timeout.as_secs(),
            timeout_secs: o.timeout.map(|t| t.as_secs()),
            max_redirections: o.max_redirections,
            max_body_bytes: o.max_body_bytes,
            user_agent: o.user_agent,
        }
    }
}

impl From<&FetchConfig> for FetchOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            max_redirections: cfg.max_redirections,
            max_body_bytes: cfg.max_body_bytes,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Global configuration loaded from `~/.config/geoload/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoloadConfig {
    /// Query parameter that carries the payload on a page URL.
    pub param_name: String,
    /// CRS tag handed to the renderer.
    #[serde(default)]
    pub crs: Crs,
    /// Optional fetch section; if missing, built-in defaults are used.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl Default for GeoloadConfig {
    fn default() -> Self {
        Self {
            param_name: DEFAULT_PARAM_NAME.to_string(),
            crs: Crs::default(),
            fetch: None,
        }
    }
}

impl GeoloadConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        self.fetch
            .as_ref()
            .map(FetchOptions::from)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("geoload")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GeoloadConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as `load_or_init` for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GeoloadConfig> {
    if !path.exists() {
        let default_cfg = GeoloadConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GeoloadConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
