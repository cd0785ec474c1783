//! HTML body stripping
//!
//! Only the markup of one webmail client is understood: when its provenance
//! header is present, the first quoted-thread container and the first
//! signature container are removed. Other documents only go through the
//! parse/serialize round trip.

use crate::config::HtmlMarkers;
use crate::types::HeaderMap;
use kuchiki::traits::{NodeIterator, TendrilSink};
use kuchiki::{NodeRef, Selectors};
use tracing::{debug, trace};

/// Strip the quoted thread and signature from an HTML body.
#[must_use]
pub fn strip_html(html: Option<&str>, headers: &HeaderMap) -> Option<String> {
    strip_html_with(html, headers, &HtmlMarkers::default())
}

/// [`strip_html`] with explicit client markers.
#[must_use]
pub fn strip_html_with(
    html: Option<&str>,
    headers: &HeaderMap,
    markers: &HtmlMarkers,
) -> Option<String> {
    let document = kuchiki::parse_html().one(html?);

    if headers.contains(&markers.provenance_header) {
        detach_first(&document, &markers.quote_selector);
        detach_first(&document, &markers.signature_selector);
    }

    Some(document.to_string())
}

/// Parse and re-serialize a document without removing anything.
#[must_use]
pub fn normalize_html(html: &str) -> String {
    kuchiki::parse_html().one(html).to_string()
}

fn detach_first(document: &NodeRef, selector: &str) {
    let Ok(selectors) = Selectors::compile(selector) else {
        debug!(selector, "Skipping invalid selector");
        return;
    };

    match selectors
        .filter(document.inclusive_descendants().elements())
        .next()
    {
        Some(element) => element.as_node().detach(),
        None => trace!(selector, "Nothing to remove"),
    }
}
