//! Run manifest written into the workspace.
//!
//! `run.json` records what a run did so a workspace left on disk can be
//! understood later without re-running the tool.

use crate::flamegraph::RenderReport;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Summary of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub version: String,
    pub generated_at: String,
    pub input: String,
    pub split_size: String,
    pub width: usize,
    pub decompressed_bytes: u64,
    pub chunks: Vec<String>,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailedChunk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedChunk {
    pub chunk: String,
    pub error: String,
}

impl RunManifest {
    /// Build a manifest stamped with the current time
    pub fn new(
        input: &Path,
        split_size: &str,
        width: usize,
        decompressed_bytes: u64,
        chunks: &[PathBuf],
        report: &RenderReport,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            input: input.display().to_string(),
            split_size: split_size.to_string(),
            width,
            decompressed_bytes,
            chunks: chunks.iter().map(|c| file_name(c)).collect(),
            images: report.images.iter().map(|i| file_name(i)).collect(),
            failures: report
                .failures
                .iter()
                .map(|f| FailedChunk {
                    chunk: file_name(&f.chunk),
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Write the manifest as pretty JSON
pub fn write_manifest(manifest: &RunManifest, path: &Path) -> Result<(), OutputError> {
    info!("Writing run manifest to: {}", path.display());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, manifest)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    debug!("Manifest lists {} chunks", manifest.chunks.len());
    Ok(())
}

/// Read a manifest back from disk
pub fn read_manifest(path: &Path) -> Result<RunManifest, OutputError> {
    let file = File::open(path)?;
    let manifest = serde_json::from_reader(BufReader::new(file))?;
    Ok(manifest)
}
