//! Anchor extraction from HTML index pages.

use scraper::{Html, Selector};

/// Collects the `href` of every anchor under the first `table` element, in
/// document order.
///
/// Documents without a table yield an empty list. Parsing is tolerant
/// (html5ever error recovery), so malformed markup degrades to whatever the
/// recovered tree contains rather than failing.
pub(super) fn extract(content: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(content);
    let document = Html::parse_document(&text);

    let table_sel = match Selector::parse("table") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    let anchor_sel = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let table = match document.select(&table_sel).next() {
        Some(t) => t,
        None => return Vec::new(),
    };

    table
        .select(&anchor_sel)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}
