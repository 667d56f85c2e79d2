//! Crate-wide error type.
//!
//! Every fallible operation in the annotator and the background renderer
//! reports through [`Error`], so the binaries have a single place to turn a
//! failure into a diagnostic and an exit status.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
