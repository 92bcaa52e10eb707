//! Filename extraction from raw listing content.
//!
//! Extraction is best-effort: content that yields nothing (no table, no
//! qualifying lines, undecodable bytes) produces an empty list, never an
//! error. Extractors are pure and keep the source order, duplicates
//! included.

mod html;
mod listing;

/// Closed set of listing formats dirls understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// HTML index page: anchors inside the first table.
    Html,
    /// Line-oriented `ls -l` style FTP listing.
    Listing,
}

impl Extractor {
    /// Extracts filenames in order of appearance in `content`.
    pub fn extract(self, content: &[u8]) -> Vec<String> {
        match self {
            Extractor::Html => html::extract(content),
            Extractor::Listing => listing::extract(content),
        }
    }
}
