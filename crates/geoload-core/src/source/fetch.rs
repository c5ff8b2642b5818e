//! Remote GeoJSON GET over libcurl.
//!
//! One request per call, no retry. The whole body is buffered; content type
//! is ignored because the decoder sniffs gzip itself.

use crate::error::{FailureClass, FetchError};
use std::time::Duration;

/// Transport knobs for the remote GET.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Whole-transfer timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
    pub max_redirections: u32,
    /// Abort once the body grows past this many bytes.
    pub max_body_bytes: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
            max_redirections: 10,
            max_body_bytes: None,
            user_agent: None,
        }
    }
}

/// Performs a GET and returns the full response body.
///
/// Follows redirects. Runs in the current thread.
pub fn get(url: &str, options: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let transport = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        class: classify_curl_error(&source),
        source,
    };

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(options.max_redirections)
        .map_err(transport)?;
    easy.connect_timeout(options.connect_timeout)
        .map_err(transport)?;
    if let Some(t) = options.timeout {
        easy.timeout(t).map_err(transport)?;
    }
    if let Some(ua) = &options.user_agent {
        easy.useragent(ua).map_err(transport)?;
    }
    // Let curl undo Content-Encoding the way a browser would; gzip *files*
    // still arrive as raw gzip bytes.
    easy.accept_encoding("").map_err(transport)?;

    let limit = options.max_body_bytes;
    let mut body = Vec::new();
    let mut over_limit = false;
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                if let Some(limit) = limit {
                    if (body.len() + data.len()) as u64 > limit {
                        over_limit = true;
                        return Ok(0); // abort transfer
                    }
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform()
    };

    if over_limit {
        return Err(FetchError::TooLarge {
            url: url.to_string(),
            limit: limit.unwrap_or_default(),
        });
    }
    performed.map_err(transport)?;

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        tracing::warn!("GET {} returned HTTP {}", url, code);
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    Ok(body)
}

/// Classify a curl error for messages and logs.
pub fn classify_curl_error(e: &curl::Error) -> FailureClass {
    if e.is_operation_timedout() {
        return FailureClass::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FailureClass::Connection;
    }
    FailureClass::Other
}
