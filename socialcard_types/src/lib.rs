//! # `socialcard_types`
//!
//! The "data" side of the `socialcard` project.
//!
//! This crate holds the object graphs that `socialcard` builds from a
//! webpage's metatags: one for the Open Graph protocol, and one for Twitter
//! Cards. It also defines the [`Meta`] name/value pair both builders consume.
//!
//! No parsing happens here - if you're looking for that, head over to the
//! `socialcard` crate instead.

#![forbid(unsafe_code)]

pub mod opengraph;
pub mod twitter;

/// A key-value metatag found on a webpage.
///
/// These come from `<meta>` elements in the document's `head`. The name is
/// taken from the element's `property` attribute when present, or its `name`
/// attribute otherwise, while the value comes from its `content` attribute.
///
/// Both fields are guaranteed to be non-empty - tags missing either one are
/// dropped before they ever become a `Meta`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Meta {
    pub name: String,
    pub value: String,
}

impl Meta {
    /// Creates a new metatag pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
