//! Types for the Open Graph protocol's object graph.
//!
//! Open Graph metadata turns a webpage into an "object within the graph":
//! one set of scalar properties (title, canonical URL, locale info, and so
//! on) plus any number of attached media objects (images, videos, audios).
//!
//! Media objects are order-sensitive: the protocol declares them as a "start"
//! tag (`og:image`) followed by qualifying tags (`og:image:width`, ...), so
//! each kind here keeps its declaration order in a `Vec`.

/// The representation of a webpage as an object within the graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Object {
    /// The title of the object, as it should appear in the graph.
    pub title: Option<String>,

    /// The type of the object (`og:type`) - for example, `video.movie`.
    ///
    /// Named `kind` since `type` is reserved in Rust.
    pub kind: Option<String>,

    /// The canonical URL used as the object's permanent ID in the graph.
    pub url: Option<String>,

    /// A one- to two-sentence description of the object.
    pub description: Option<String>,

    /// The locale the object's tags are marked up in, like `en_US`.
    pub locale: Option<String>,

    /// Other locales the page is available in.
    pub alternate_locales: Vec<String>,

    /// The word(s) appearing before the object's title in a sentence, like
    /// "the" or "an".
    ///
    /// Pages may declare this tag more than once, so every occurrence is
    /// kept, in document order.
    pub determiners: Vec<String>,

    /// The name of the overall site the object lives on.
    pub site_name: Option<String>,

    /// Image files representing the object, in declaration order.
    pub images: Vec<Image>,

    /// Video files complementing the object, in declaration order.
    pub videos: Vec<Video>,

    /// Audio files accompanying the object, in declaration order.
    pub audios: Vec<Audio>,
}

/// The properties shared by every media object: an audio, video, or image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaRef {
    /// The URL of the media file. Always present - it's what opened the
    /// media object in the first place.
    pub url: String,

    /// An `https` URL to use instead when the page is viewed securely.
    pub secure_url: Option<String>,

    /// The MIME type of the media file.
    pub mime_type: Option<String>,
}

/// The dimensions of a sized media object (a video or image).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    /// Width in pixels.
    pub width: Option<u32>,

    /// Height in pixels.
    pub height: Option<u32>,
}

/// An image file representing the object within the graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pub media: MediaRef,
    pub size: Size,
}

/// A video file complementing the object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Video {
    pub media: MediaRef,
    pub size: Size,
}

/// An audio file accompanying the object.
///
/// Unlike images and videos, audio carries no size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Audio {
    pub media: MediaRef,
}

impl Image {
    /// Creates an image with the given source URL and nothing else set.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            media: MediaRef {
                url: url.into(),
                ..MediaRef::default()
            },
            size: Size::default(),
        }
    }
}

impl Video {
    /// Creates a video with the given source URL and nothing else set.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            media: MediaRef {
                url: url.into(),
                ..MediaRef::default()
            },
            size: Size::default(),
        }
    }
}

impl Audio {
    /// Creates an audio with the given source URL and nothing else set.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            media: MediaRef {
                url: url.into(),
                ..MediaRef::default()
            },
        }
    }
}
