//! Payload decoding: bytes → JSON → feature list.
//!
//! Strategies are tried in a fixed order per origin and the first one that
//! yields valid JSON wins. Earlier failures only move on to the next
//! strategy; the last one's error is what the caller sees.

mod armor;
mod normalize;
mod strategy;

pub use armor::{gzip_base64, inline_param};
pub use normalize::{normalize, normalize_optional};
pub use strategy::Strategy;

use crate::error::{FormatError, LoadError};
use crate::feature::FeatureList;
use crate::source::Payload;
use serde_json::Value;

/// Decodes a payload into its features. Pure; no I/O.
pub fn decode(payload: &Payload) -> Result<FeatureList, LoadError> {
    let value = parse(payload)?;
    Ok(normalize(value)?)
}

/// Runs the strategies for the payload's origin and returns the first JSON
/// value any of them produces.
pub fn parse(payload: &Payload) -> Result<Value, FormatError> {
    let mut last = None;
    for &strategy in Strategy::order(payload.origin) {
        match strategy.apply(&payload.bytes) {
            Ok(value) => {
                tracing::debug!("payload decoded with {} strategy", strategy);
                return Ok(value);
            }
            Err(e) => {
                tracing::debug!("{} strategy failed: {}", strategy, e);
                last = Some(e);
            }
        }
    }
    Err(FormatError::Undecodable {
        origin: payload.origin,
        last,
    })
}
