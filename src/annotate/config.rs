/// Configuration for the heading annotation pass.
///
/// This module defines the markup conventions the annotator recognizes and
/// the options a caller can set for a single run.
use crate::common::{Error, Result};
use std::path::{Path, PathBuf};

/// Prefix of a line that opens a new slide (level-2 heading).
pub const SLIDE_MARKER: &str = "## ";

/// Quarto cell option that labels a figure.
pub const FIGURE_LABEL_MARKER: &str = "#| label: fig-";

/// Opening of an embedded frame, matched ASCII case-insensitively.
pub const IFRAME_TAG: &str = "<iframe";

/// Attribute name carrying the grid pattern.
pub const STATE_ATTRIBUTE: &str = "data-state";

/// Extension a document must carry to be accepted.
pub const DOCUMENT_EXTENSION: &str = "qmd";

/// Options for one annotation run.
///
/// # Examples
///
/// ```rust
/// use slidegrid::annotate::AnnotateOptions;
///
/// // Update the input file in place with fresh randomness
/// let options = AnnotateOptions::default();
///
/// // Or write elsewhere, reproducibly
/// let options = AnnotateOptions::new()
///     .with_output("slides.annotated.qmd")
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Destination path; `None` overwrites the input
    pub output: Option<PathBuf>,
    /// Seed for pattern selection; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl AnnotateOptions {
    /// Create a new `AnnotateOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the result to `output` instead of overwriting the input.
    #[inline]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Fix the sequence of random pattern choices for the whole run.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the seed.
    #[inline]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// The path the run will write to, given its input.
    pub fn destination<'a>(&'a self, input: &'a Path) -> &'a Path {
        self.output.as_deref().unwrap_or(input)
    }
}

/// Reject inputs whose path does not end in `.qmd`.
///
/// The check is on the raw path suffix and is case-sensitive, so a file named
/// just `.qmd` is accepted while `deck.QMD` is not.
pub fn ensure_document_extension(path: &Path) -> Result<()> {
    let suffix = format!(".{DOCUMENT_EXTENSION}");
    if path.as_os_str().as_encoded_bytes().ends_with(suffix.as_bytes()) {
        Ok(())
    } else {
        Err(Error::InvalidExtension {
            path: path.to_path_buf(),
            expected: DOCUMENT_EXTENSION,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_defaults_to_input() {
        let input = Path::new("deck.qmd");
        assert_eq!(AnnotateOptions::new().destination(input), input);

        let options = AnnotateOptions::new().with_output("out.qmd");
        assert_eq!(options.destination(input), Path::new("out.qmd"));
    }

    #[test]
    fn test_extension_check() {
        assert!(ensure_document_extension(Path::new("talks/deck.qmd")).is_ok());
        assert!(ensure_document_extension(Path::new("deck.md")).is_err());
        assert!(ensure_document_extension(Path::new("deck.QMD")).is_err());
        assert!(ensure_document_extension(Path::new("deck")).is_err());
        assert!(ensure_document_extension(Path::new("qmd")).is_err());
    }

    #[test]
    fn test_bare_extension_file_accepted() {
        assert!(ensure_document_extension(Path::new(".qmd")).is_ok());
        assert!(ensure_document_extension(Path::new("talks/.qmd")).is_ok());
    }
}
