//! Everything that happens after rendering.
//!
//! - Launching a viewer per flamegraph
//! - Writing the run manifest

pub mod manifest;
pub mod viewer;

// Re-export main functions
pub use manifest::{read_manifest, write_manifest, FailedChunk, RunManifest};
pub use viewer::{open_images, DetachedViewer, LaunchReport, Launcher};
