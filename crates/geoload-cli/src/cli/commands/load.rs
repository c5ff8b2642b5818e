//! `geoload load <param>` – run the pipeline on a raw parameter.

use super::present;
use crate::cli::OutputArgs;
use anyhow::Result;
use geoload_core::config::GeoloadConfig;
use geoload_core::loader::Loader;

pub async fn run_load(cfg: &GeoloadConfig, param: &str, output: &OutputArgs) -> Result<()> {
    let loader = Loader::new(cfg.fetch_options());
    let state = loader.load(Some(param)).await;
    tracing::debug!("load finished: {}", state);
    present(cfg, &loader, output)
}
