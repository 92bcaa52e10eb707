//! Single-shot blocking fetch over libcurl.
//!
//! libcurl speaks all three schemes dirls uses; an ftp URL ending in `/`
//! retrieves the directory LIST output as the response body, so one
//! transfer path covers both the HTTP index page and the FTP listing.

use std::time::Duration;
use thiserror::Error;

/// Per-transfer timeout unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A failed fetch: either the transfer itself broke (timeout, DNS failure,
/// refused connection, FTP transfer error) or the server answered with a
/// non-success status.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported an error.
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    /// Transfer completed with a non-2xx response code.
    #[error("{url} returned status {code}")]
    Status { url: String, code: u32 },
}

impl FetchError {
    /// True when the failure was the transfer timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transfer(e) if e.is_operation_timedout())
    }
}

/// Builds the request URL by literal concatenation: `scheme://host:port`
/// followed by `path` as given (callers pass a leading `/`).
///
/// No escaping is applied; hosts or paths that need percent-encoding are
/// out of scope for this client.
pub fn build_url(scheme: &str, host: &str, port: &str, path: &str) -> String {
    format!("{scheme}://{host}:{port}{path}")
}

/// Performs one blocking transfer of `url` and returns the whole body.
///
/// One attempt, no retry. Redirects are followed by libcurl; the body is
/// fully buffered before returning. Both the connect phase and the overall
/// transfer are bounded by `timeout`.
pub fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    // HTTP success is 2xx; a completed FTP retrieval reports 226, which
    // lands in the same band.
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }
    Ok(body)
}
