//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from
//! third-party error types to the unified Error type.

use super::types::Error;

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        // The temporary file is dropped (and removed) together with `err`.
        Error::Io(err.error)
    }
}

#[cfg(feature = "backgrounds")]
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Image(other.to_string()),
        }
    }
}
