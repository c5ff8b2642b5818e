//! `geoload page <url>` – load the parameter carried by a page URL.

use super::present;
use crate::cli::OutputArgs;
use anyhow::Result;
use geoload_core::config::GeoloadConfig;
use geoload_core::loader::Loader;

pub async fn run_page(
    cfg: &GeoloadConfig,
    page_url: &str,
    param_name: &str,
    output: &OutputArgs,
) -> Result<()> {
    let loader = Loader::new(cfg.fetch_options());
    let state = loader.load_page(page_url, param_name).await;
    tracing::debug!("page load finished: {}", state);
    present(cfg, &loader, output)
}
