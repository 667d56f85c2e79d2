//! Slidegrid - grid backgrounds for Quarto reveal.js slide decks
//!
//! This crate prepares presentation decks for a dark theme with subtle grid
//! backgrounds. It has two independent halves:
//!
//! - **Annotation**: rewrite every level-2 slide heading of a `.qmd` file to
//!   carry a `{data-state="grid-..."}` attribute. Slides showing a figure or
//!   an embedded frame get `grid-none`; the rest get a random grid pattern.
//!   The pass is idempotent: rerunning it replaces attributes instead of
//!   stacking them.
//! - **Rendering**: draw the PNG background for each pattern (feature
//!   `backgrounds`, on by default).
//!
//! # Example - Annotating a deck
//!
//! ```no_run
//! use slidegrid::annotate::{AnnotateOptions, process_file};
//!
//! # fn main() -> Result<(), slidegrid::Error> {
//! let summary = process_file("slides.qmd", &AnnotateOptions::new().with_seed(42))?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Rendering backgrounds
//!
//! ```no_run
//! # #[cfg(feature = "backgrounds")]
//! # fn main() -> Result<(), slidegrid::Error> {
//! for path in slidegrid::backgrounds::generate_backgrounds("backgrounds")? {
//!     println!("wrote {}", path.display());
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "backgrounds"))]
//! # fn main() {}
//! ```

/// Common error type and logging setup
pub mod common;

/// Slide heading annotation
pub mod annotate;

/// Background image rendering
#[cfg(feature = "backgrounds")]
pub mod backgrounds;

pub use annotate::{AnnotateOptions, AnnotationSummary, GridPattern, process_file};
pub use common::{Error, Result};
