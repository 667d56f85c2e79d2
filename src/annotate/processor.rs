/// The annotation pass.
///
/// For every slide heading the processor scans the slide body, selects a
/// pattern, and rewrites the heading, counting how many headings gained an
/// attribute and how many had an existing one replaced.
use super::config::{AnnotateOptions, ensure_document_extension};
use super::document::Document;
use super::rewriter::{RewriteKind, rewrite_heading};
use super::scanner::{is_slide_marker, slide_has_figure_or_iframe};
use super::selector::{PatternSource, SeededPatternSource, select_pattern};
use crate::common::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Heading counts from one pass over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationCounts {
    /// Headings that had no attribute before
    pub added: usize,
    /// Headings whose existing attribute was replaced
    pub updated: usize,
}

impl AnnotationCounts {
    /// Every heading touched.
    #[inline]
    pub fn total(&self) -> usize {
        self.added + self.updated
    }
}

/// Outcome of [`process_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSummary {
    /// The document that was read
    pub input: PathBuf,
    /// Where the result went, when not written back to `input`
    pub output: Option<PathBuf>,
    /// Heading counts
    pub counts: AnnotationCounts,
}

impl AnnotationSummary {
    /// Headings that had no attribute before.
    #[inline]
    pub fn added(&self) -> usize {
        self.counts.added
    }

    /// Headings whose existing attribute was replaced.
    #[inline]
    pub fn updated(&self) -> usize {
        self.counts.updated
    }

    /// Every heading touched.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.total()
    }
}

impl fmt::Display for AnnotationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .input
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.input.to_string_lossy());
        writeln!(f, "Successfully processed {name}")?;
        writeln!(f, "  - Added grid attributes: {}", self.added())?;
        writeln!(f, "  - Updated existing attributes: {}", self.updated())?;
        writeln!(f, "  - Total slides modified: {}", self.total())?;
        match &self.output {
            Some(output) => write!(f, "  - Output written to: {}", output.display()),
            None => write!(f, "  - File updated in place"),
        }
    }
}

/// Annotate every slide heading of `document` in place.
pub fn annotate_document(
    document: &mut Document,
    source: &mut dyn PatternSource,
) -> AnnotationCounts {
    let mut counts = AnnotationCounts::default();

    for index in 0..document.len() {
        let line = &document.lines()[index];
        if !is_slide_marker(line) {
            continue;
        }

        let has_content = slide_has_figure_or_iframe(document.lines(), index);
        let pattern = select_pattern(has_content, source);
        let rewrite = rewrite_heading(line, pattern);

        tracing::debug!(
            line = index + 1,
            %pattern,
            has_content,
            kind = ?rewrite.kind,
            "annotated slide heading"
        );

        match rewrite.kind {
            RewriteKind::Added => counts.added += 1,
            RewriteKind::Updated(_) => counts.updated += 1,
        }
        document.replace_line(index, rewrite.line);
    }

    counts
}

/// Annotate a `.qmd` file and write the result.
///
/// The input must carry the `.qmd` extension and exist; both are checked
/// before anything is written. The whole document is rewritten in memory and
/// then written atomically to `options.output`, or back over `input`.
///
/// # Examples
///
/// ```rust,no_run
/// use slidegrid::annotate::{AnnotateOptions, process_file};
///
/// # fn main() -> Result<(), slidegrid::Error> {
/// let summary = process_file("slides.qmd", &AnnotateOptions::new().with_seed(42))?;
/// println!("{summary}");
/// # Ok(())
/// # }
/// ```
pub fn process_file<P: AsRef<Path>>(
    input: P,
    options: &AnnotateOptions,
) -> Result<AnnotationSummary> {
    let input = input.as_ref();
    ensure_document_extension(input)?;
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let mut document = Document::read(input)?;
    let mut source = SeededPatternSource::new(options.seed);
    let counts = annotate_document(&mut document, &mut source);

    let destination = options.destination(input);
    document.write_atomic(destination)?;
    tracing::info!(
        path = %destination.display(),
        added = counts.added,
        updated = counts.updated,
        "wrote annotated document"
    );

    Ok(AnnotationSummary {
        input: input.to_path_buf(),
        output: options.output.clone(),
        counts,
    })
}
