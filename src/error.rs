use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to convert value to JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A configuration referenced a filter this crate does not provide.
    #[error("Unknown inflection filter '{name}'. Known filters: {known}.")]
    UnknownFilter { name: String, known: String },

    /// Represents invalid values in an otherwise well-formed configuration
    #[error("Configuration error: {0}.")]
    ConfigValidation(String),
}

impl Error {
    /// Builds an [`Error::UnknownFilter`] listing the canonical filter names.
    pub fn unknown_filter(name: impl Into<String>) -> Self {
        Error::UnknownFilter {
            name: name.into(),
            known: crate::constants::FILTER_NAMES.join(", "),
        }
    }
}

/// Convenience type alias for Results with the crate error as the default error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
/// * `E` - The error type, defaults to [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
