//! Splitting the decompressed trace into fixed-size chunks.

pub mod split;

pub use split::{list_chunks, Splitter};
