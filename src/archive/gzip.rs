//! Streaming gzip decompression.
//!
//! Xdebug writes multi-member gzip streams when tracing is appended, so the
//! multi-member decoder is used. The copy is buffered and never holds the
//! whole trace in memory.

use crate::utils::config::COPY_BUFFER_SIZE;
use crate::utils::error::DecompressError;
use flate2::read::MultiGzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Decompress `input` into a new file at `output`
///
/// # Returns
/// Number of decompressed bytes written
///
/// # Errors
/// * `DecompressError::OpenInput` - input missing or unreadable
/// * `DecompressError::CreateOutput` - output cannot be created (or already exists)
/// * `DecompressError::Stream` - corrupt or truncated archive, or write failure
pub fn decompress_trace(input: &Path, output: &Path) -> Result<u64, DecompressError> {
    info!("Decompressing {} -> {}", input.display(), output.display());

    let file = File::open(input).map_err(|source| DecompressError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;

    let out_file = File::options()
        .write(true)
        .create_new(true)
        .open(output)
        .map_err(|source| DecompressError::CreateOutput {
            path: output.to_path_buf(),
            source,
        })?;

    let mut decoder = MultiGzDecoder::new(BufReader::with_capacity(COPY_BUFFER_SIZE, file));
    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, out_file);

    let stream_err = |source: io::Error| DecompressError::Stream {
        path: input.to_path_buf(),
        source,
    };

    let written = io::copy(&mut decoder, &mut writer).map_err(stream_err)?;
    writer.flush().map_err(stream_err)?;

    debug!(
        "Decompressed {} bytes ({:.2} MB)",
        written,
        written as f64 / (1024.0 * 1024.0)
    );

    Ok(written)
}
