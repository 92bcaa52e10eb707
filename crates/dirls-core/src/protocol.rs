//! Protocol descriptors: the closed set of transports dirls can speak.

use std::str::FromStr;
use thiserror::Error;

/// Resolved wire protocol for a single fetch. Determines the URL scheme and
/// the well-known port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolKind {
    Http,
    Https,
    Ftp,
}

impl ProtocolKind {
    /// URL scheme string.
    pub fn scheme(self) -> &'static str {
        match self {
            ProtocolKind::Http => "http",
            ProtocolKind::Https => "https",
            ProtocolKind::Ftp => "ftp",
        }
    }

    /// Well-known port, as the string it appears with in the URL.
    pub fn default_port(self) -> &'static str {
        match self {
            ProtocolKind::Http => "80",
            ProtocolKind::Https => "443",
            ProtocolKind::Ftp => "21",
        }
    }
}

/// Caller-facing protocol family. `Http` combines with the secure flag to
/// resolve to http or https; `Ftp` has no secure variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Http,
    Ftp,
}

/// Rejected protocol family string.
///
/// Selection is validated up front rather than falling back to a default
/// family, so a typo fails the run instead of silently querying over FTP.
#[derive(Debug, Error)]
#[error("unknown protocol family {0:?} (expected \"http\" or \"ftp\")")]
pub struct ParseFamilyError(String);

impl FromStr for Family {
    type Err = ParseFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Family::Http),
            "ftp" => Ok(Family::Ftp),
            other => Err(ParseFamilyError(other.to_string())),
        }
    }
}
