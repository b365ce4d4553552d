use core::num::ParseIntError;

/// An error that occurred while building the Twitter Card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TwitterError {
    /// A `twitter:card` tag carried a value that isn't one of the known
    /// card types (`summary`, `summary_large_image`, `app`, `player`).
    InvalidCardType(
        /// The offending value.
        String,
    ),

    /// A player width or height tag's value wasn't a base-10 integer.
    InvalidDimension {
        /// The full tag name, like `twitter:player:width`.
        field: String,

        /// The value that failed to parse.
        value: String,

        /// What the integer parser had to say about it.
        source: ParseIntError,
    },
}

impl core::fmt::Display for TwitterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TwitterError::InvalidCardType(value) => {
                write!(f, "Invalid card type: `{value}`.")
            }

            TwitterError::InvalidDimension {
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

impl core::error::Error for TwitterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TwitterError::InvalidDimension { source, .. } => Some(source),
            TwitterError::InvalidCardType(_) => None,
        }
    }
}
