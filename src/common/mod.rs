//! Common types and utilities shared by the annotator and the renderer.

// Submodule declarations
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use error::{Error, Result};
pub use logging::init_tracing;
