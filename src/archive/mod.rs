//! Decompression of the gzipped input trace.

pub mod gzip;

pub use gzip::decompress_trace;
