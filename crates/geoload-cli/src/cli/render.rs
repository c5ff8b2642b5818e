//! Terminal renderer: prints the editor view as a FeatureCollection.

use geoload_core::feature::to_feature_collection;
use geoload_core::view::{Renderer, View};

#[derive(Debug, Default)]
pub struct StdoutRenderer {
    pub pretty: bool,
    /// Set when the view was an error (or printing failed).
    pub failure: Option<String>,
}

impl StdoutRenderer {
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            failure: None,
        }
    }

    /// Text printed for an editor view.
    pub fn editor_text(&self, view: &View<'_>) -> Option<serde_json::Result<String>> {
        match view {
            View::Editor { features, .. } => {
                let fc = to_feature_collection(features);
                Some(if self.pretty {
                    serde_json::to_string_pretty(&fc)
                } else {
                    serde_json::to_string(&fc)
                })
            }
            _ => None,
        }
    }
}

impl Renderer for StdoutRenderer {
    fn render(&mut self, view: &View<'_>) {
        match view {
            View::Loading => tracing::debug!("still loading"),
            View::Error { message } => self.failure = Some(message.to_string()),
            View::Editor { features, crs } => {
                match self.editor_text(view) {
                    Some(Ok(text)) => println!("{}", text),
                    Some(Err(e)) => self.failure = Some(e.to_string()),
                    None => {}
                }
                eprintln!("{} features ({})", features.len(), crs);
            }
        }
    }
}
