//! # `socialcard`
//!
//! A library to read the social-metadata "card" of a webpage: its
//! [Open Graph](https://ogp.me/) object and its
//! [Twitter Card](https://developer.x.com/en/docs/twitter-for-websites/cards/overview/abouts-cards).
//!
//! Both descriptions come from the same place - the `<meta>` tags in the
//! page's `head` - but they're built independently: each builder walks the
//! full metatag list, picks out its own namespace (`og:` or `twitter:`),
//! and folds the flat name/value pairs into a typed object graph.
//!
//! ## Usage
//!
//! Hand [`fetch`] a URL, or skip the network and hand [`from_html`] a
//! document you already have:
//!
//! ```
//! let card = socialcard::from_html(
//!     r#"<html><head>
//!         <meta property="og:title" content="A Good Page">
//!         <meta name="twitter:card" content="summary">
//!     </head></html>"#,
//! )?;
//!
//! assert_eq!(card.open_graph.title.as_deref(), Some("A Good Page"));
//! assert_eq!(
//!     card.twitter.card_type,
//!     Some(socialcard::twitter::types::CardType::Summary),
//! );
//! # Ok::<(), socialcard::error::CardError>(())
//! ```

#![forbid(unsafe_code)]

use crate::error::CardError;

pub mod content;
pub mod error;
pub mod opengraph;
pub mod twitter;

mod util;

// the metatag pair both builders consume
pub use socialcard_types::Meta;

/// All the data retrieved from the Open Graph and Twitter Card metatags on
/// a webpage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageCard {
    pub open_graph: opengraph::types::Object,
    pub twitter: twitter::types::Card,
}

/// Retrieves the [`PageCard`] of the webpage at the given URL.
///
/// This blocks while the page downloads. If you already have the document,
/// use [`from_html`] instead.
///
/// # Errors
///
/// This will return an error if the page can't be fetched, or if either
/// builder rejects its metatags.
pub fn fetch(url: &str) -> Result<PageCard, CardError> {
    let meta = content::read(url)?;
    from_meta(&meta)
}

/// Builds the [`PageCard`] for an HTML document already in hand.
///
/// # Errors
///
/// This will return an error if either builder rejects the document's
/// metatags.
pub fn from_html(html: &str) -> Result<PageCard, CardError> {
    from_meta(&content::extract_meta(html))
}

/// Builds the [`PageCard`] from an already-extracted metatag list.
///
/// Both builders walk the same list; the first failure aborts the whole
/// call. The list must hold only non-empty names and values, in document
/// order - [`content::extract_meta`] produces exactly that.
///
/// # Errors
///
/// This will return an error if either builder rejects the metatags.
pub fn from_meta(meta: &[Meta]) -> Result<PageCard, CardError> {
    let open_graph = opengraph::parse(meta)?;
    let twitter = twitter::parse(meta)?;

    Ok(PageCard { open_graph, twitter })
}
