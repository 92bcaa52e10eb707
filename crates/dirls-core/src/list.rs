//! The end-to-end listing pipeline: select, fetch, extract.

use std::time::Duration;

use crate::connect;
use crate::fetch::{self, FetchError};
use crate::protocol::Family;

/// One directory-listing request, fully parameterized.
///
/// These are the inputs the reference workflow hard-codes or prompts for;
/// here they are plain fields so callers (CLI, tests) supply them.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub family: Family,
    /// Use https; only meaningful for `Family::Http`.
    pub secure: bool,
    pub host: String,
    /// Directory path with leading slash. Should end in `/` so FTP servers
    /// return a listing instead of a file.
    pub path: String,
    /// Port override; None means the protocol's well-known port.
    pub port: Option<String>,
    pub timeout: Duration,
}

impl ListRequest {
    pub fn new(
        family: Family,
        secure: bool,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            family,
            secure,
            host: host.into(),
            path: path.into(),
            port: None,
            timeout: fetch::DEFAULT_TIMEOUT,
        }
    }
}

/// Fetches one directory listing and extracts its filenames.
///
/// A failed fetch returns the error without attempting extraction. A fetch
/// that succeeds but yields no extractable names is an empty, successful
/// result, not an error.
pub fn list_directory(req: &ListRequest) -> Result<Vec<String>, FetchError> {
    let plan = connect::plan(req.family, req.secure);
    let port = req.port.as_deref().unwrap_or(&plan.port);
    let url = fetch::build_url(plan.scheme(), &req.host, port, &req.path);

    tracing::info!("fetching {}", url);
    let body = fetch::fetch(&url, req.timeout)?;
    tracing::debug!("fetched {} bytes from {}", body.len(), url);

    Ok(plan.extractor.extract(&body))
}
