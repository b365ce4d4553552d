//! Reads a webpage and extracts its metatags.
//!
//! This is the boundary between the builders and the outside world: it
//! fetches a page, walks its `head` for `<meta>` elements, and flattens
//! them into an ordered list of [`Meta`] pairs. Document order matters to
//! the builders, so it's preserved here.
//!
//! A tag only counts when it has both a non-empty name (`property`
//! attribute first, `name` attribute as a fallback) and a non-empty
//! `content` value. That filter runs once, here - the builders assume every
//! pair they see passed it.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use socialcard_types::Meta;

use crate::content::error::ContentError;

pub mod error;

/// Matches `<meta>` elements inside the document's `head`.
static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("head meta").expect("static selector is valid"));

/// The HTTP client shared by every [`read`] call.
static CLIENT: Lazy<reqwest::blocking::Client> = Lazy::new(reqwest::blocking::Client::new);

/// Scans the page at the given URL and returns a list of its metatags, in
/// document order.
///
/// # Errors
///
/// This will return an error if the page can't be fetched, or if its body
/// can't be read.
pub fn read(url: &str) -> Result<Vec<Meta>, ContentError> {
    log::debug!("Fetching page content... url: `{url}`");

    let body = CLIENT
        .get(url)
        .send()
        .inspect_err(|e| log::error!("Failed to fetch the page! url: `{url}`, err: {e}"))?
        .text()
        .inspect_err(|e| log::error!("Failed to read the page body! url: `{url}`, err: {e}"))?;

    Ok(extract_meta(&body))
}

/// Extracts the metatags from an HTML document already in hand.
///
/// Only `<meta>` elements inside the `head` count. Elements missing a name,
/// a `content` attribute, or carrying an empty string for either, are
/// dropped.
pub fn extract_meta(html: &str) -> Vec<Meta> {
    let document = Html::parse_document(html);

    let mut result = Vec::new();
    for element in document.select(&META_SELECTOR) {
        let tag = element.value();

        let Some(name) = tag.attr("property").or_else(|| tag.attr("name")) else {
            continue;
        };
        let Some(value) = tag.attr("content") else {
            continue;
        };

        if name.is_empty() || value.is_empty() {
            continue;
        }

        result.push(Meta::new(name, value));
    }

    log::debug!("Found {} metatag(s).", result.len());
    result
}
