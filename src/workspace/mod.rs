//! Per-run workspace directory.
//!
//! Owns the naming of every artifact a run produces and guards against
//! reusing a directory left behind by an earlier run.

pub mod layout;

pub use layout::{derive_base_name, image_path_for, Workspace};
