// src/core/html.rs
use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// All text under `el`, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Normalized text of the first descendant of `el` matching `sel`.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(text_of)
}
