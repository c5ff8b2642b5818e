//! CLI for the geoload pipeline.

mod commands;
mod render;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use geoload_core::config;
use geoload_core::view::Crs;
use std::path::Path;

use commands::{run_encode, run_load, run_page};

/// Top-level CLI for geoload.
#[derive(Debug, Parser)]
#[command(name = "geoload")]
#[command(about = "geoload: resolve a geojson parameter into GeoJSON features", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// How to print a loaded feature list.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Pretty-print the resulting FeatureCollection.
    #[arg(long)]
    pub pretty: bool,

    /// CRS tag to report with the features (WGS84, GCJ02, BD09). Defaults to the config value.
    #[arg(long, value_name = "CRS")]
    pub crs: Option<Crs>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load a raw (percent-encoded) parameter: an http(s) URL or an inline payload.
    Load {
        /// Parameter value as it appears in the query string.
        param: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract the parameter from a page URL and load it.
    Page {
        /// Full page URL, e.g. https://viewer.example.com/?geojson=...
        page_url: String,

        /// Query parameter name (defaults to the config value, normally "geojson").
        #[arg(long, value_name = "NAME")]
        param_name: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Gzip and base64-encode a GeoJSON file into an inline parameter.
    Encode {
        /// Path to the GeoJSON file.
        path: String,

        /// Print base64 text without percent-encoding it.
        #[arg(long)]
        raw: bool,

        /// Print a full page URL on this base instead of the bare parameter.
        #[arg(long, value_name = "URL")]
        page: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Load { param, output } => run_load(&cfg, &param, &output).await?,
            CliCommand::Page {
                page_url,
                param_name,
                output,
            } => {
                let name = param_name.as_deref().unwrap_or(&cfg.param_name);
                run_page(&cfg, &page_url, name, &output).await?;
            }
            CliCommand::Encode { path, raw, page } => {
                run_encode(&cfg, Path::new(&path), raw, page.as_deref())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
