//! Flamegraph Splitter
//!
//! Turns an Xdebug function trace that is too large for `flamegraph.pl`
//! into a series of flamegraphs: the gzipped trace is decompressed into a
//! per-run workspace, cut into fixed-size chunks with `split`, each chunk is
//! rendered by FlameGraph, and the resulting SVGs are opened in a browser.
//!
//! This crate provides the implementation behind the
//! `flamegraph-splitter` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! git clone https://github.com/brendangregg/FlameGraph.git
//! flamegraph-splitter my_trace.xt.gz --split-size 50M
//! ```

pub mod archive;
pub mod chunker;
pub mod commands;
pub mod flamegraph;
pub mod output;
pub mod utils;
pub mod workspace;
