//! CLI command handlers. Each command is in its own file.

mod encode;
mod load;
mod page;

pub use encode::run_encode;
pub use load::run_load;
pub use page::run_page;

use super::render::StdoutRenderer;
use super::OutputArgs;
use anyhow::Result;
use geoload_core::config::GeoloadConfig;
use geoload_core::loader::Loader;
use geoload_core::view::{Renderer, View};

/// Renders the loader's final snapshot and turns an error state into an error.
fn present(cfg: &GeoloadConfig, loader: &Loader, output: &OutputArgs) -> Result<()> {
    let snapshot = loader.snapshot();
    let crs = output.crs.unwrap_or(cfg.crs);
    let mut renderer = StdoutRenderer::new(output.pretty);
    renderer.render(&View::from_snapshot(&snapshot, crs));
    match renderer.failure {
        Some(message) => anyhow::bail!("{}", message),
        None => Ok(()),
    }
}
