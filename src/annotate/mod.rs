/// Grid background annotation for Quarto reveal.js slide decks.
///
/// This module rewrites the level-2 headings of a `.qmd` document so that
/// each slide carries a `{data-state="grid-..."}` attribute. The reveal.js
/// theme turns that state into a background image.
///
/// # Rules
///
/// - A slide starts at a line beginning with `## ` and runs to the next such
///   line or the end of the file.
/// - Slides containing a figure label (`#| label: fig-`) or an `<iframe`
///   (any case) get `grid-none`, so plots sit on a plain background.
/// - All other slides get one of [`GridPattern::RANDOMIZED`], chosen
///   uniformly. A seed makes the whole run reproducible.
/// - Existing `{data-state="..."}` values and legacy `{.grid-...}` classes are
///   replaced rather than duplicated, so the pass can be rerun at will.
///
/// # Quick Start
///
/// ```rust,no_run
/// use slidegrid::annotate::{AnnotateOptions, process_file};
///
/// # fn main() -> Result<(), slidegrid::Error> {
/// // Update in place with a fixed seed
/// let summary = process_file("slides.qmd", &AnnotateOptions::new().with_seed(42))?;
/// println!("{summary}");
/// # Ok(())
/// # }
/// ```
///
/// # Working in memory
///
/// ```rust
/// use slidegrid::annotate::{Document, SeededPatternSource, annotate_document};
///
/// let mut doc = Document::parse("## Chart\n#| label: fig-chart\n");
/// let counts = annotate_document(&mut doc, &mut SeededPatternSource::from_seed(1));
///
/// assert_eq!(counts.added, 1);
/// assert_eq!(
///     doc.render(),
///     "## Chart {data-state=\"grid-none\"}\n#| label: fig-chart\n"
/// );
/// ```
///
/// # Architecture
///
/// - [`config`]: markup conventions and [`AnnotateOptions`]
/// - [`pattern`]: the [`GridPattern`] vocabulary
/// - [`document`]: line model with atomic writes
/// - [`scanner`]: figure/iframe detection in a slide body
/// - [`selector`]: injectable [`PatternSource`] and the selection rule
/// - [`rewriter`]: ordered attribute matchers and heading rewriting
/// - [`processor`]: the full pass and file-level entry point
pub mod config;
pub mod document;
pub mod pattern;
pub mod processor;
pub mod rewriter;
pub mod scanner;
pub mod selector;

pub use config::AnnotateOptions;
pub use document::Document;
pub use pattern::GridPattern;
pub use processor::{AnnotationCounts, AnnotationSummary, annotate_document, process_file};
pub use rewriter::{ExistingAttribute, Rewrite, RewriteKind, rewrite_heading};
pub use scanner::slide_has_figure_or_iframe;
pub use selector::{PatternSource, SeededPatternSource, select_pattern};
