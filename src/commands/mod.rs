//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod split;

// Re-export main command functions
pub use models::{SplitArgs, SplitOutcome};
pub use split::{execute_split, execute_split_with, validate_args};
