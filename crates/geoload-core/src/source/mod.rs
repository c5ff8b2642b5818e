//! Source resolution: turn the raw `geojson` parameter into payload bytes.
//!
//! A parameter that looks like an absolute http(s) URL is fetched with one
//! GET; anything else is the payload itself. Which decode strategies apply
//! later depends only on where the bytes came from, never on headers.

mod fetch;
mod param;

pub use fetch::{classify_curl_error, get, FetchOptions};
pub use param::{decode_param, encode_param, query_param, DEFAULT_PARAM_NAME};

use crate::error::LoadError;

/// Where a payload's bytes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// HTTP response body; may hold raw binary (gzip).
    Remote,
    /// The parameter text itself; text only, so gzip must be base64-armored.
    Inline,
}

/// A decoded parameter, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    Remote(&'a str),
    Inline(&'a str),
}

/// Bytes to decode plus their origin. Dropped once decoding finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub origin: Origin,
    pub bytes: Vec<u8>,
}

impl Payload {
    pub fn remote(bytes: Vec<u8>) -> Self {
        Self {
            origin: Origin::Remote,
            bytes,
        }
    }

    pub fn inline(text: &str) -> Self {
        Self {
            origin: Origin::Inline,
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// Classifies a percent-decoded parameter. Scheme match is ASCII case-insensitive.
pub fn classify(param: &str) -> Source<'_> {
    if has_prefix_ignore_case(param, "http://") || has_prefix_ignore_case(param, "https://") {
        Source::Remote(param)
    } else {
        Source::Inline(param)
    }
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Produces the payload for a percent-decoded parameter.
///
/// Blocks on the network for remote parameters; run it from `spawn_blocking`
/// in async code.
pub fn resolve(param: &str, options: &FetchOptions) -> Result<Payload, LoadError> {
    match classify(param) {
        Source::Remote(url) => {
            tracing::debug!("resolving remote geojson from {}", url);
            let bytes = get(url, options)?;
            tracing::debug!("fetched {} bytes from {}", bytes.len(), url);
            Ok(Payload::remote(bytes))
        }
        Source::Inline(text) => {
            tracing::debug!("using inline geojson payload ({} bytes)", text.len());
            Ok(Payload::inline(text))
        }
    }
}

/// Seam between the loader and the network. `HttpResolver` is the real one.
pub trait Resolver: Send + Sync {
    fn resolve(&self, param: &str) -> Result<Payload, LoadError>;
}

/// Resolves remote parameters with curl.
#[derive(Debug, Clone, Default)]
pub struct HttpResolver {
    pub options: FetchOptions,
}

impl HttpResolver {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

impl Resolver for HttpResolver {
    fn resolve(&self, param: &str) -> Result<Payload, LoadError> {
        resolve(param, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_http_and_https_as_remote() {
        assert_eq!(
            classify("https://example.com/a.geojson"),
            Source::Remote("https://example.com/a.geojson")
        );
        assert_eq!(
            classify("http://localhost:8080/x"),
            Source::Remote("http://localhost:8080/x")
        );
    }

    #[test]
    fn classify_scheme_is_case_insensitive() {
        assert!(matches!(classify("HTTPS://EXAMPLE.COM/"), Source::Remote(_)));
        assert!(matches!(classify("Http://example.com/"), Source::Remote(_)));
    }

    #[test]
    fn classify_everything_else_as_inline() {
        assert!(matches!(classify(r#"{"type":"Feature"}"#), Source::Inline(_)));
        assert!(matches!(classify("H4sIAAAAAAAA"), Source::Inline(_)));
        assert!(matches!(classify("ftp://example.com/a"), Source::Inline(_)));
        assert!(matches!(classify(" https://example.com/"), Source::Inline(_)));
        assert!(matches!(classify("https:/example.com"), Source::Inline(_)));
        assert!(matches!(classify("http"), Source::Inline(_)));
        assert!(matches!(classify(""), Source::Inline(_)));
    }

    #[test]
    fn classify_handles_multibyte_prefix() {
        assert!(matches!(classify("ÿÿÿÿÿÿÿÿ"), Source::Inline(_)));
    }

    #[test]
    fn resolve_inline_does_no_io() {
        let payload = resolve(r#"[1,2]"#, &FetchOptions::default()).unwrap();
        assert_eq!(payload.origin, Origin::Inline);
        assert_eq!(payload.bytes, b"[1,2]");
    }
}
