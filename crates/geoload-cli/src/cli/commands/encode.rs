//! `geoload encode <file>` – build an inline parameter from a GeoJSON file.

use anyhow::{Context, Result};
use geoload_core::config::GeoloadConfig;
use geoload_core::decode::{decode, gzip_base64, inline_param};
use geoload_core::source::Payload;
use std::path::Path;

pub fn run_encode(cfg: &GeoloadConfig, path: &Path, raw: bool, page: Option<&str>) -> Result<()> {
    println!("{}", encode_file(cfg, path, raw, page)?);
    Ok(())
}

/// Reads and checks the file, then returns the text to print.
pub fn encode_file(
    cfg: &GeoloadConfig,
    path: &Path,
    raw: bool,
    page: Option<&str>,
) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let features = decode(&Payload::inline(&text))
        .with_context(|| format!("{} is not loadable GeoJSON", path.display()))?;
    tracing::info!("encoding {} features from {}", features.len(), path.display());

    if raw {
        return Ok(gzip_base64(&text)?);
    }
    let param = inline_param(&text)?;
    Ok(match page {
        Some(base) => {
            let sep = if base.contains('?') { '&' } else { '?' };
            format!("{}{}{}={}", base, sep, cfg.param_name, param)
        }
        None => param,
    })
}
