//! Field extraction helpers
//!
//! Stateless lookups over a parsed document or element. A missing element is reported as
//! `None`; the stage modules decide which fields are mandatory.

use scraper::{ElementRef, Selector};
use url::Url;

/// Normalizes extracted text
///
/// Line breaks and non-breaking spaces become spaces, whitespace runs collapse to one
/// space, and both ends are trimmed.
pub fn clean_text(text: &str) -> String {
    text.replace('\n', " ")
        .replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Concatenated text of an element and all of its descendants, cleaned
pub fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// First element under `scope` matching `selector`
pub fn find_first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Every element under `scope` matching `selector`, in document order
pub fn extract_all<'a>(scope: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(selector).collect()
}

/// Cleaned text of the first match
pub fn extract_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    find_first(scope, selector).map(element_text)
}

/// Attribute value of the first match
pub fn extract_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    find_first(scope, selector)
        .and_then(|element| element.value().attr(attr))
        .map(ToString::to_string)
}

/// Resolves an href against the site base URL
///
/// Returns `None` for empty hrefs and anything that does not resolve to http(s). A
/// root-relative href replaces any path on `base_url`.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute.to_string())
        }
        _ => None,
    }
}
