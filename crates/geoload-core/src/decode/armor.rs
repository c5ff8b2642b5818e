//! Inverse of the base64+gzip strategy, for producing inline parameters.

use crate::source::encode_param;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Gzips `text` and base64-encodes the result (standard alphabet, padded).
pub fn gzip_base64(text: &str) -> io::Result<String> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::best());
    enc.write_all(text.as_bytes())?;
    Ok(STANDARD.encode(enc.finish()?))
}

/// A ready-to-use query value: gzip, base64, then percent-encoding.
pub fn inline_param(text: &str) -> io::Result<String> {
    Ok(encode_param(&gzip_base64(text)?))
}
