//! The `geojson` query parameter: extraction from a page URL and the single
//! percent-decoding pass applied at entry.

use crate::error::FormatError;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Query parameter name the page carries the payload in.
pub const DEFAULT_PARAM_NAME: &str = "geojson";

/// Characters left as-is by `encode_param` (same set as JS `encodeURIComponent`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Returns the still-encoded value of the first `name` pair in the page URL's
/// query, or `None` if the page has no such parameter.
///
/// The value is returned raw so that `decode_param` is the only decoding pass.
pub fn query_param(page_url: &str, name: &str) -> Result<Option<String>, FormatError> {
    let url = Url::parse(page_url).map_err(FormatError::InvalidPageUrl)?;
    Ok(url
        .query()
        .and_then(|q| raw_pair_value(q, name))
        .map(str::to_string))
}

fn raw_pair_value<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (percent_decode_str(key).decode_utf8_lossy() == name).then_some(value)
    })
}

/// Percent-decodes the parameter exactly once. `+` is kept literally since
/// base64 payloads use it.
pub fn decode_param(raw: &str) -> Result<String, FormatError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(FormatError::InvalidParameter)
}

/// Percent-encodes text so it survives as a query value; inverse of `decode_param`.
pub fn encode_param(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}
