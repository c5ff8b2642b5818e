//! Error taxonomy for a load attempt.
//!
//! `FetchError` covers the network side of a remote parameter, `FormatError`
//! everything after the bytes are in memory. Both collapse into `LoadError`,
//! whose `Display` is the message shown in the error state.

use crate::source::Origin;
use thiserror::Error;

/// Terminal failure of one load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Coarse class of a transport failure, for log lines and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Connect or transfer timed out.
    Timeout,
    /// DNS, refused connection, reset, empty reply.
    Connection,
    /// Anything curl reports that is not one of the above.
    Other,
}

impl std::fmt::Display for FailureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureClass::Timeout => write!(f, "timeout"),
            FailureClass::Connection => write!(f, "connection failure"),
            FailureClass::Other => write!(f, "transfer failure"),
        }
    }
}

/// The remote GET failed. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} failed ({class}): {source}")]
    Transport {
        url: String,
        class: FailureClass,
        #[source]
        source: curl::Error,
    },
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    #[error("GET {url} body exceeds {limit} bytes")]
    TooLarge { url: String, limit: u64 },
    #[error("fetch worker failed: {0}")]
    Worker(String),
}

/// The payload could not be turned into a feature list.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("geojson parameter is not valid percent-encoded UTF-8")]
    InvalidParameter(#[source] std::str::Utf8Error),
    #[error("invalid page URL: {0}")]
    InvalidPageUrl(#[source] url::ParseError),
    #[error("payload is neither valid JSON nor valid {}", undecodable_hint(.origin))]
    Undecodable {
        origin: Origin,
        #[source]
        last: Option<StrategyError>,
    },
    #[error("unsupported GeoJSON format")]
    UnsupportedShape,
}

fn undecodable_hint(origin: &Origin) -> &'static str {
    match origin {
        Origin::Inline => "base64+gzip text",
        Origin::Remote => "gzip-compressed JSON",
    }
}

/// Why a single decode strategy gave up. Only ever surfaced as the source of
/// `FormatError::Undecodable`; otherwise it just moves on to the next strategy.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("gzip: {0}")]
    Gzip(#[source] std::io::Error),
    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("text is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("JSON syntax: {0}")]
    JsonSyntax(#[from] serde_json::Error),
}

impl LoadError {
    /// True for failures that came from the network side.
    pub fn is_fetch(&self) -> bool {
        matches!(self, LoadError::Fetch(_))
    }
}
