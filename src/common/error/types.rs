//! Error variants for slidegrid operations.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for slidegrid operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not carry the required extension
    #[error("Input file must be a .{expected} file: {}", .path.display())]
    InvalidExtension { path: PathBuf, expected: &'static str },

    /// Input path does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// IO error while reading or writing a document or image
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Name does not match any grid pattern
    #[error("Unknown grid pattern: {0}")]
    UnknownPattern(String),

    /// Image encoding failed
    #[error("Image error: {0}")]
    Image(String),
}

impl Error {
    /// Whether the input was refused before any processing started.
    ///
    /// The command-line tools report these as plain errors and everything
    /// else as a processing failure.
    pub fn is_input_rejection(&self) -> bool {
        matches!(self, Error::InvalidExtension { .. } | Error::InputNotFound(_))
    }
}

/// Result type for slidegrid operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message_names_path() {
        let err = Error::InputNotFound(PathBuf::from("talk/slides.qmd"));
        assert_eq!(err.to_string(), "Input file not found: talk/slides.qmd");
    }

    #[test]
    fn test_input_rejections() {
        assert!(Error::InputNotFound(PathBuf::from("a.qmd")).is_input_rejection());
        assert!(
            Error::InvalidExtension {
                path: PathBuf::from("a.md"),
                expected: "qmd",
            }
            .is_input_rejection()
        );
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        assert!(!Error::Io(io).is_input_rejection());
        assert!(!Error::UnknownPattern("grid-x".to_string()).is_input_rejection());
    }

    #[test]
    fn test_extension_message() {
        let err = Error::InvalidExtension {
            path: PathBuf::from("slides.md"),
            expected: "qmd",
        };
        assert!(err.to_string().starts_with("Input file must be a .qmd file"));
    }
}
