use crate::{
    content::error::ContentError, opengraph::error::OpenGraphError, twitter::error::TwitterError,
};

/// An error that occurred while retrieving a webpage's card.
#[derive(Debug)]
pub enum CardError {
    /// The page's content couldn't be read.
    Content(ContentError),

    /// The Open Graph builder rejected the page's metatags.
    OpenGraph(OpenGraphError),

    /// The Twitter Card builder rejected the page's metatags.
    Twitter(TwitterError),
}

impl core::fmt::Display for CardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CardError::Content(e) => write!(f, "Failed to read the page. err: {e}"),
            CardError::OpenGraph(e) => {
                write!(f, "Failed to build the Open Graph object. err: {e}")
            }
            CardError::Twitter(e) => write!(f, "Failed to build the Twitter Card. err: {e}"),
        }
    }
}

impl core::error::Error for CardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CardError::Content(e) => Some(e),
            CardError::OpenGraph(e) => Some(e),
            CardError::Twitter(e) => Some(e),
        }
    }
}

impl From<ContentError> for CardError {
    fn from(value: ContentError) -> Self {
        CardError::Content(value)
    }
}

impl From<OpenGraphError> for CardError {
    fn from(value: OpenGraphError) -> Self {
        CardError::OpenGraph(value)
    }
}

impl From<TwitterError> for CardError {
    fn from(value: TwitterError) -> Self {
        CardError::Twitter(value)
    }
}
