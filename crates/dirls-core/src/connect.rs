//! Connection selection: maps a (family, secure) pair onto a consistent
//! (protocol, port, extractor) bundle.

use crate::extract::Extractor;
use crate::protocol::{Family, ProtocolKind};

/// Everything one fetch needs: the resolved protocol, the port to dial, and
/// the extractor that understands that protocol's listing format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPlan {
    pub kind: ProtocolKind,
    /// Port as it appears in the URL. Starts as the protocol's well-known
    /// port; callers may override it before fetching.
    pub port: String,
    pub extractor: Extractor,
}

impl ConnectionPlan {
    pub fn scheme(&self) -> &'static str {
        self.kind.scheme()
    }
}

/// Selects the plan for a (family, secure) pair.
///
/// Total over both enums. FTP has no secure variant here, so the flag is
/// ignored for `Family::Ftp`. Scheme and port always belong to the same
/// protocol; the pairing cannot be mixed by construction.
pub fn plan(family: Family, secure: bool) -> ConnectionPlan {
    let kind = match (family, secure) {
        (Family::Http, false) => ProtocolKind::Http,
        (Family::Http, true) => ProtocolKind::Https,
        (Family::Ftp, _) => ProtocolKind::Ftp,
    };
    let extractor = match family {
        Family::Http => Extractor::Html,
        Family::Ftp => Extractor::Listing,
    };
    ConnectionPlan {
        kind,
        port: kind.default_port().to_string(),
        extractor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_insecure_plan() {
        let p = plan(Family::Http, false);
        assert_eq!(p.kind, ProtocolKind::Http);
        assert_eq!(p.scheme(), "http");
        assert_eq!(p.port, "80");
        assert_eq!(p.extractor, Extractor::Html);
    }

    #[test]
    fn http_secure_plan() {
        let p = plan(Family::Http, true);
        assert_eq!(p.kind, ProtocolKind::Https);
        assert_eq!(p.scheme(), "https");
        assert_eq!(p.port, "443");
        assert_eq!(p.extractor, Extractor::Html);
    }

    #[test]
    fn ftp_plan_ignores_secure_flag() {
        for secure in [false, true] {
            let p = plan(Family::Ftp, secure);
            assert_eq!(p.kind, ProtocolKind::Ftp);
            assert_eq!(p.scheme(), "ftp");
            assert_eq!(p.port, "21");
            assert_eq!(p.extractor, Extractor::Listing);
        }
    }
}
