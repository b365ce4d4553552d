/// An error that occurred while reading a webpage's content.
//
// note: `reqwest::Error` is neither `Clone` nor `PartialEq`, so neither is
// this type.
#[derive(Debug)]
pub enum ContentError {
    /// The page couldn't be fetched, or its body couldn't be read.
    Http(reqwest::Error),
}

impl core::fmt::Display for ContentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContentError::Http(e) => {
                write!(f, "Encountered error while fetching the page. err: {e}")
            }
        }
    }
}

impl core::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Http(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ContentError {
    fn from(value: reqwest::Error) -> Self {
        ContentError::Http(value)
    }
}
