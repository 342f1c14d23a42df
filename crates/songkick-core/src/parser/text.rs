//! Small helpers shared by the extractors

use scraper::{ElementRef, Selector};

use crate::error::{Result, SongkickError};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| SongkickError::ParseError(format!("Invalid selector {:?}: {:?}", css, e)))
}

/// Collapses runs of whitespace into single spaces
pub(crate) fn clean_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-normalised text of an element, `None` when blank
pub(crate) fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = clean_text(&element.text().collect::<String>());
    if text.is_empty() { None } else { Some(text) }
}

pub(crate) fn first_text(scope: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().and_then(element_text)
}

pub(crate) fn first_attr(scope: &ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Text nodes trimmed and joined by single spaces, blanks dropped
pub(crate) fn joined_text_nodes(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
