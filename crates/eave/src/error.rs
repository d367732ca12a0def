//! Error types for the crate. None of these ever cross the public
//! query boundary; failed lookups degrade to absent results instead.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Internal error conditions. These mark recoverable anomalies (a
/// coordinate translation on a detached view, malformed host data) and
/// are converted to absent results before reaching callers.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A geometric operation failed, e.g. translating a rectangle into
    /// the coordinate space of a window it is not attached to.
    #[error("geometry")]
    Geometry(String),

    /// The host framework reported something it should not be able to.
    #[error("host")]
    Host(String),
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Error::Geometry(e.to_string())
    }
}
