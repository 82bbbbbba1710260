//! Byte-size chunking via an external `split` program.
//!
//! Chunk boundaries are byte counts only; a trace record may straddle two
//! chunks. The renderer copes with a truncated trailing record.

use crate::utils::config::CHUNK_PREFIX;
use crate::utils::error::SplitError;
use crate::utils::size::ChunkSize;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Invokes `<program> -b <size> <input> <prefix>`
#[derive(Debug, Clone)]
pub struct Splitter {
    program: String,
    size: ChunkSize,
}

impl Splitter {
    pub fn new(program: impl Into<String>, size: ChunkSize) -> Self {
        Self {
            program: program.into(),
            size,
        }
    }

    /// Split `input` into chunks written under `prefix`
    ///
    /// # Returns
    /// Chunk paths in sorted (byte) order. May be empty for an empty input.
    ///
    /// # Errors
    /// * `SplitError::Spawn` - the splitter could not be started
    /// * `SplitError::ExitStatus` - the splitter exited unsuccessfully
    /// * `SplitError::ReadDir` - the output directory could not be listed
    pub fn split(&self, input: &Path, prefix: &Path) -> Result<Vec<PathBuf>, SplitError> {
        info!(
            "Splitting {} into {} chunks ({} bytes each)",
            input.display(),
            self.size,
            self.size.bytes()
        );

        let status = Command::new(&self.program)
            .arg("-b")
            .arg(self.size.as_arg())
            .arg(input)
            .arg(prefix)
            .status()
            .map_err(|source| SplitError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SplitError::ExitStatus {
                program: self.program.clone(),
                status,
            });
        }

        let dir = match prefix.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let chunks = list_chunks(dir)?;

        if chunks.is_empty() {
            warn!("Splitter produced no chunks from {}", input.display());
        } else {
            debug!("Splitter produced {} chunks", chunks.len());
        }

        Ok(chunks)
    }
}

/// Chunk files in `dir`, sorted by name
///
/// A chunk is any regular file named `trace_part_<suffix>` without a dot, so
/// rendered `.svg` siblings are never picked up.
pub fn list_chunks(dir: &Path) -> Result<Vec<PathBuf>, SplitError> {
    let read_dir_err = |source: std::io::Error| SplitError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut chunks = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        let is_chunk = name
            .strip_prefix(CHUNK_PREFIX)
            .is_some_and(|suffix| !suffix.is_empty() && !suffix.contains('.'));

        if is_chunk && entry.file_type().map_err(read_dir_err)?.is_file() {
            chunks.push(entry.path());
        }
    }

    chunks.sort();
    Ok(chunks)
}
