//! Individual decode strategies.

use crate::error::StrategyError;
use crate::source::Origin;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use flate2::read::GzDecoder;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::io::Read;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// One way of getting from payload bytes to a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The bytes are a gzip stream.
    GzipBytes,
    /// The bytes are UTF-8 JSON text.
    PlainText,
    /// The bytes are base64 text wrapping a gzip stream.
    Base64Gzip,
}

impl Strategy {
    /// Strategies for an origin, in the order they are tried.
    ///
    /// Response bodies can carry raw gzip so that goes first; parameter text
    /// cannot, so plain JSON goes first and gzip has to be base64-armored.
    pub fn order(origin: Origin) -> &'static [Strategy] {
        match origin {
            Origin::Remote => &[Strategy::GzipBytes, Strategy::PlainText],
            Origin::Inline => &[Strategy::PlainText, Strategy::Base64Gzip],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::GzipBytes => "gzip",
            Strategy::PlainText => "plain-text",
            Strategy::Base64Gzip => "base64+gzip",
        }
    }

    /// Decodes `bytes` to text this strategy's way, then parses the text as JSON.
    pub fn apply(self, bytes: &[u8]) -> Result<Value, StrategyError> {
        let text: Cow<'_, str> = match self {
            Strategy::GzipBytes => Cow::Owned(gunzip(bytes)?),
            Strategy::PlainText => Cow::Borrowed(std::str::from_utf8(bytes)?),
            Strategy::Base64Gzip => Cow::Owned(gunzip(&unbase64(bytes)?)?),
        };
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        Ok(serde_json::from_str(text)?)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn gunzip(bytes: &[u8]) -> Result<String, StrategyError> {
    let mut out = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut out)
        .map_err(StrategyError::Gzip)?;
    String::from_utf8(out).map_err(|e| StrategyError::Utf8(e.utf8_error()))
}

/// Standard alphabet first, URL-safe as a fallback; padding optional and
/// ASCII whitespace ignored.
fn unbase64(bytes: &[u8]) -> Result<Vec<u8>, StrategyError> {
    let compact: Vec<u8> = bytes
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    match STANDARD_LENIENT.decode(&compact) {
        Ok(raw) => Ok(raw),
        Err(e) => URL_SAFE_LENIENT.decode(&compact).map_err(|_| e.into()),
    }
}
