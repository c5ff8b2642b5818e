//! What gets handed to the rendering collaborator for a given load snapshot.

use crate::feature::Feature;
use crate::loader::{LoadSnapshot, LoadState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coordinate reference system the renderer should assume for the features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Crs {
    #[default]
    Wgs84,
    Gcj02,
    Bd09,
}

impl Crs {
    pub fn tag(self) -> &'static str {
        match self {
            Crs::Wgs84 => "WGS84",
            Crs::Gcj02 => "GCJ02",
            Crs::Bd09 => "BD09",
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Crs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Crs::Wgs84, Crs::Gcj02, Crs::Bd09]
            .into_iter()
            .find(|c| c.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown CRS {s:?} (expected WGS84, GCJ02 or BD09)"))
    }
}

/// Screen to show.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    /// Placeholder while an attempt is in flight.
    Loading,
    /// Load failed; rendering stops here.
    Error { message: &'a str },
    /// The editor with whatever features are committed (possibly none).
    Editor { features: &'a [Feature], crs: Crs },
}

impl<'a> View<'a> {
    pub fn from_snapshot(snapshot: &'a LoadSnapshot, crs: Crs) -> Self {
        match &snapshot.state {
            LoadState::Loading => View::Loading,
            LoadState::Error(message) => View::Error { message },
            LoadState::Idle | LoadState::Ready => View::Editor {
                features: snapshot.features.as_deref().unwrap_or_default(),
                crs,
            },
        }
    }
}

/// The rendering surface. Implemented outside this crate.
pub trait Renderer {
    fn render(&mut self, view: &View<'_>);
}
