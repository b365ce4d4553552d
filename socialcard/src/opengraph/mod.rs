//! Builds the Open Graph object for a webpage.
//!
//! Open Graph metadata is flat: a page declares `og:`-prefixed metatags one
//! after another, and structure comes entirely from declaration order. A
//! start tag like `og:image` opens a new image, and the qualifying tags
//! that follow (`og:image:width`, `og:image:secure_url`, ...) apply to
//! whichever image is currently open.
//!
//! That makes this a single left-to-right pass with a little local state:
//! one "open" media object per kind, flushed onto the object when a fresh
//! start tag closes it, or when the tags run out.

use socialcard_types::{
    Meta,
    opengraph::{Audio, Image, Object, Video},
};

use crate::opengraph::error::OpenGraphError;

pub mod error;

/// Re-exports of the Open Graph types from `socialcard_types`.
///
/// These let you name the parsed graph without depending on the types crate
/// directly.
pub mod types {
    pub use socialcard_types::opengraph::{Audio, Image, MediaRef, Object, Size, Video};
}

/// The namespace every Open Graph metatag lives under.
const OG_PREFIX: &str = "og:";

// sub-namespaces for the qualifying tags of each media kind
const IMAGE_PREFIX: &str = "image:";
const VIDEO_PREFIX: &str = "video:";
const AUDIO_PREFIX: &str = "audio:";

/// Builds the [`Object`] representation of a webpage from its metatags.
///
/// Works in one pass over the tags, in document order. Tags outside the
/// `og:` namespace are skipped, and `og:` tags this library doesn't
/// recognize are ignored.
///
/// # Errors
///
/// This will return an error if a qualifying media tag (say,
/// `og:image:width`) shows up before its media object was opened
/// (`og:image`), or if a width/height isn't a base-10 integer.
pub fn parse(meta: &[Meta]) -> Result<Object, OpenGraphError> {
    let mut obj = Object::default();

    // the media objects currently being built, one per kind.
    //
    // qualifying tags always apply to these. they only land on `obj` once a
    // fresh start tag closes them, or at the end of the pass.
    let mut img: Option<Image> = None;
    let mut vid: Option<Video> = None;
    let mut aud: Option<Audio> = None;

    for m in meta {
        let Some(name) = m.name.strip_prefix(OG_PREFIX) else {
            continue;
        };

        // qualifying tags for the open image
        if let Some(field) = name.strip_prefix(IMAGE_PREFIX) {
            let Some(img) = img.as_mut() else {
                log::error!("Found `{}` before any `og:image` tag!", m.name);
                return Err(OpenGraphError::ImageNotInitialized);
            };

            match field {
                "secure_url" => img.media.secure_url = Some(m.value.clone()),
                "type" => img.media.mime_type = Some(m.value.clone()),
                "width" => img.size.width = Some(parse_dimension(&m.name, &m.value)?),
                "height" => img.size.height = Some(parse_dimension(&m.name, &m.value)?),
                other => log::trace!("Ignoring unknown image tag: `og:image:{other}`."),
            }
            continue;
        }

        // ...and the open video
        if let Some(field) = name.strip_prefix(VIDEO_PREFIX) {
            let Some(vid) = vid.as_mut() else {
                log::error!("Found `{}` before any `og:video` tag!", m.name);
                return Err(OpenGraphError::VideoNotInitialized);
            };

            match field {
                "secure_url" => vid.media.secure_url = Some(m.value.clone()),
                "type" => vid.media.mime_type = Some(m.value.clone()),
                "width" => vid.size.width = Some(parse_dimension(&m.name, &m.value)?),
                "height" => vid.size.height = Some(parse_dimension(&m.name, &m.value)?),
                other => log::trace!("Ignoring unknown video tag: `og:video:{other}`."),
            }
            continue;
        }

        // ...and the open audio. audio has no size, so only two fields
        // qualify it.
        if let Some(field) = name.strip_prefix(AUDIO_PREFIX) {
            let Some(aud) = aud.as_mut() else {
                log::error!("Found `{}` before any `og:audio` tag!", m.name);
                return Err(OpenGraphError::AudioNotInitialized);
            };

            match field {
                "secure_url" => aud.media.secure_url = Some(m.value.clone()),
                "type" => aud.media.mime_type = Some(m.value.clone()),
                other => log::trace!("Ignoring unknown audio tag: `og:audio:{other}`."),
            }
            continue;
        }

        match name {
            "title" => obj.title = Some(m.value.clone()),
            "type" => obj.kind = Some(m.value.clone()),
            "url" => obj.url = Some(m.value.clone()),
            "description" => obj.description = Some(m.value.clone()),
            "locale" => obj.locale = Some(m.value.clone()),
            "site_name" => obj.site_name = Some(m.value.clone()),

            // these two may repeat, so every occurrence is kept
            "determiner" => obj.determiners.push(m.value.clone()),
            "locale:alternate" => obj.alternate_locales.push(m.value.clone()),

            // start tags: close whatever's open, then open a fresh media
            // object with its URL set
            "image" => {
                if let Some(done) = img.take() {
                    obj.images.push(done);
                }
                img = Some(Image::from_url(m.value.clone()));
            }
            "video" => {
                if let Some(done) = vid.take() {
                    obj.videos.push(done);
                }
                vid = Some(Video::from_url(m.value.clone()));
            }
            "audio" => {
                if let Some(done) = aud.take() {
                    obj.audios.push(done);
                }
                aud = Some(Audio::from_url(m.value.clone()));
            }

            other => log::trace!("Ignoring unknown Open Graph tag: `og:{other}`."),
        }
    }

    // whatever's still open at the end of the page is complete, too - it's
    // never discarded for lack of a following start tag
    if let Some(done) = img {
        obj.images.push(done);
    }
    if let Some(done) = vid {
        obj.videos.push(done);
    }
    if let Some(done) = aud {
        obj.audios.push(done);
    }

    Ok(obj)
}

/// Parses a width/height tag's value as a base-10 integer.
fn parse_dimension(field: &str, value: &str) -> Result<u32, OpenGraphError> {
    value.parse::<u32>().map_err(|e| {
        log::error!("Failed to parse `{field}` as an integer! value: `{value}`, err: {e}");
        OpenGraphError::InvalidDimension {
            field: field.to_string(),
            value: value.to_string(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::util::logger;

    use super::error::OpenGraphError;

    #[test]
    fn dimensions_must_be_integers() {
        logger();

        assert_eq!(super::parse_dimension("og:image:width", "200"), Ok(200));

        let err = super::parse_dimension("og:video:height", "tall")
            .expect_err("`tall` is not an integer");
        assert!(matches!(
            err,
            OpenGraphError::InvalidDimension { ref field, ref value, .. }
                if field == "og:video:height" && value == "tall"
        ));
    }
}
