// src/core/html.rs
//! Selector helpers over `scraper` documents. Every reader is total:
//! a missing element is `None`, never an error.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::error::ExtractError;

pub fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(format!("{css}: {e}")))
}

/// Visible text of an element, whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&normalize_entities(&raw))
}

/// Text of the first match under `root`, `None` when absent or blank.
pub fn first_text(root: ElementRef<'_>, sel: &Selector) -> Option<String> {
    root.select(sel)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
}

/// Text of every match under `root`, blanks dropped, document order kept.
pub fn all_text(root: ElementRef<'_>, sel: &Selector) -> Vec<String> {
    root.select(sel)
        .map(text_of)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Outer HTML of every element matching `sel` in a full page.
pub fn outer_blocks(page: &str, sel: &Selector) -> Vec<String> {
    let doc = Html::parse_document(page);
    doc.select(sel).map(|el| el.html()).collect()
}

pub fn has_match(page: &str, sel: &Selector) -> bool {
    Html::parse_document(page).select(sel).next().is_some()
}
