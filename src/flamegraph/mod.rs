//! Flamegraph rendering through Brendan Gregg's `flamegraph.pl`.
//!
//! This module checks that the renderer is present and runs it once per
//! chunk, turning collapsed trace text into SVG flamegraphs.

pub mod renderer;
pub mod script;

// Re-export main types
pub use renderer::{render_chunk, render_chunks, ChunkFailure, FlamegraphConfig, RenderReport};
pub use script::verify_flamegraph_script;
