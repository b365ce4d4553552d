use core::num::ParseIntError;

/// An error that occurred while building the Open Graph object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenGraphError {
    /// An `og:image:*` tag appeared before any `og:image` tag opened an
    /// image to apply it to.
    ImageNotInitialized,

    /// An `og:video:*` tag appeared before any `og:video` tag.
    VideoNotInitialized,

    /// An `og:audio:*` tag appeared before any `og:audio` tag.
    AudioNotInitialized,

    /// A width or height tag's value wasn't a base-10 integer.
    InvalidDimension {
        /// The full tag name, like `og:image:width`.
        field: String,

        /// The value that failed to parse.
        value: String,

        /// What the integer parser had to say about it.
        source: ParseIntError,
    },
}

impl core::fmt::Display for OpenGraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OpenGraphError::ImageNotInitialized => {
                f.write_str("Invalid field: requires `og:image` to be declared before it.")
            }

            OpenGraphError::VideoNotInitialized => {
                f.write_str("Invalid field: requires `og:video` to be declared before it.")
            }

            OpenGraphError::AudioNotInitialized => {
                f.write_str("Invalid field: requires `og:audio` to be declared before it.")
            }

            OpenGraphError::InvalidDimension {
                field,
                value,
                source,
            } => {
                write!(
                    f,
                    "The `{field}` tag's value, `{value}`, is not an integer. err: {source}"
                )
            }
        }
    }
}

impl core::error::Error for OpenGraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpenGraphError::InvalidDimension { source, .. } => Some(source),
            OpenGraphError::ImageNotInitialized
            | OpenGraphError::VideoNotInitialized
            | OpenGraphError::AudioNotInitialized => None,
        }
    }
}
