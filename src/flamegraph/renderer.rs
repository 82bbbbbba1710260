//! Driving the external flamegraph renderer, one chunk at a time.
//!
//! Each chunk is fed to `<script> --width=<N>` on stdin and the renderer's
//! stdout becomes `<chunk>.svg`. A chunk that fails is recorded and skipped;
//! the remaining chunks are still rendered.

use crate::utils::config::{DEFAULT_FLAMEGRAPH_SCRIPT, DEFAULT_WIDTH};
use crate::utils::error::RenderError;
use crate::workspace::image_path_for;
use log::{debug, error, info};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    pub script: PathBuf,
    pub width: usize,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from(DEFAULT_FLAMEGRAPH_SCRIPT),
            width: DEFAULT_WIDTH,
        }
    }
}

impl FlamegraphConfig {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn width_arg(&self) -> String {
        format!("--width={}", self.width)
    }
}

/// A chunk whose render invocation failed
#[derive(Debug)]
pub struct ChunkFailure {
    pub chunk: PathBuf,
    pub error: RenderError,
}

/// Outcome of rendering every chunk
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Images produced, in chunk order
    pub images: Vec<PathBuf>,
    pub failures: Vec<ChunkFailure>,
}

impl RenderReport {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("{} rendered, {} failed", self.images.len(), self.failures.len())
    }
}

/// Render every chunk in order, collecting failures instead of aborting
pub fn render_chunks(chunks: &[PathBuf], config: &FlamegraphConfig) -> RenderReport {
    let mut report = RenderReport::default();

    for (i, chunk) in chunks.iter().enumerate() {
        debug!("Rendering chunk {}/{}: {}", i + 1, chunks.len(), chunk.display());

        match render_chunk(chunk, config) {
            Ok(image) => report.images.push(image),
            Err(error) => {
                error!("Chunk {} failed: {}", chunk.display(), error);
                report.failures.push(ChunkFailure {
                    chunk: chunk.clone(),
                    error,
                });
            }
        }
    }

    info!("Rendering finished: {}", report.summary());
    report
}

/// Render one chunk to `<chunk>.svg`
///
/// On failure the partially written image is removed so only complete
/// images are left for the viewer.
pub fn render_chunk(chunk: &Path, config: &FlamegraphConfig) -> Result<PathBuf, RenderError> {
    let image = image_path_for(chunk);

    let result = run_renderer(chunk, &image, config);
    if result.is_err() && image.exists() {
        if let Err(e) = fs::remove_file(&image) {
            debug!("Could not remove partial image {}: {}", image.display(), e);
        }
    }

    result.map(|()| image)
}

fn run_renderer(chunk: &Path, image: &Path, config: &FlamegraphConfig) -> Result<(), RenderError> {
    let input = File::open(chunk).map_err(|source| RenderError::OpenChunk {
        chunk: chunk.to_path_buf(),
        source,
    })?;

    let output = File::create(image).map_err(|source| RenderError::CreateImage {
        image: image.to_path_buf(),
        source,
    })?;

    let status = Command::new(&config.script)
        .arg(config.width_arg())
        .stdin(Stdio::from(input))
        .stdout(Stdio::from(output))
        .status()
        .map_err(|source| RenderError::Spawn {
            script: config.script.clone(),
            source,
        })?;

    if !status.success() {
        return Err(RenderError::ExitStatus {
            chunk: chunk.to_path_buf(),
            status,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[cfg(unix)]
    fn write_script(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("flamegraph.pl");
        fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[test]
    fn test_width_arg() {
        let config = FlamegraphConfig::default().with_width(900);
        assert_eq!(config.width_arg(), "--width=900");
        assert_eq!(FlamegraphConfig::default().width_arg(), "--width=1600");
    }

    #[cfg(unix)]
    #[test]
    fn test_render_chunk_captures_stdout() {
        let temp_dir = tempfile::tempdir().unwrap();
        // Echo the width flag and the chunk contents into the "svg"
        let script = write_script(temp_dir.path(), r#"printf '<svg %s>' "$1"; cat; printf '</svg>'"#);
        let chunk = temp_dir.path().join("trace_part_aa");
        fs::write(&chunk, "main;foo 1\n").unwrap();

        let config = FlamegraphConfig::new(script).with_width(800);
        let image = render_chunk(&chunk, &config).unwrap();

        assert_eq!(image, temp_dir.path().join("trace_part_aa.svg"));
        assert_eq!(
            fs::read_to_string(&image).unwrap(),
            "<svg --width=800>main;foo 1\n</svg>"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_chunk_does_not_stop_others() {
        let temp_dir = tempfile::tempdir().unwrap();
        let script = write_script(
            temp_dir.path(),
            r#"input=$(cat); case "$input" in *BROKEN*) echo partial; exit 3;; esac; echo '<svg/>'"#,
        );

        let chunks: Vec<PathBuf> = ["trace_part_aa", "trace_part_ab", "trace_part_ac"]
            .iter()
            .map(|name| temp_dir.path().join(name))
            .collect();
        fs::write(&chunks[0], "ok\n").unwrap();
        fs::write(&chunks[1], "BROKEN\n").unwrap();
        fs::write(&chunks[2], "ok\n").unwrap();

        let report = render_chunks(&chunks, &FlamegraphConfig::new(script));

        assert_eq!(
            report.images,
            vec![
                temp_dir.path().join("trace_part_aa.svg"),
                temp_dir.path().join("trace_part_ac.svg"),
            ]
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].chunk, chunks[1]);
        assert!(matches!(
            report.failures[0].error,
            RenderError::ExitStatus { .. }
        ));
        assert!(!temp_dir.path().join("trace_part_ab.svg").exists());
        assert_eq!(report.summary(), "2 rendered, 1 failed");
    }

    #[test]
    fn test_missing_renderer_is_per_chunk_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let chunk = temp_dir.path().join("trace_part_aa");
        fs::write(&chunk, "x").unwrap();

        let config = FlamegraphConfig::new(temp_dir.path().join("no-such-script.pl"));
        let result = render_chunk(&chunk, &config);

        assert!(matches!(result, Err(RenderError::Spawn { .. })));
        assert!(!temp_dir.path().join("trace_part_aa.svg").exists());
    }

    #[test]
    fn test_missing_chunk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = render_chunk(
            &temp_dir.path().join("trace_part_zz"),
            &FlamegraphConfig::default(),
        );

        assert!(matches!(result, Err(RenderError::OpenChunk { .. })));
    }
}
