//! Utility modules for configuration, error handling, and size parsing.

pub mod config;
pub mod error;
pub mod size;

// Re-export commonly used error types for convenience
pub use error::{
    DecompressError, OutputError, PreconditionError, RenderError, SizeError, SplitError,
    ViewerError,
};
pub use size::ChunkSize;
