use crate::flamegraph::FlamegraphConfig;
use crate::utils::error::ViewerError;
use crate::utils::config::{DEFAULT_LAUNCH_DELAY, DEFAULT_SPLITTER, DEFAULT_VIEWER};
use crate::utils::size::ChunkSize;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the split command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SplitArgs {
    /// Gzipped Xdebug trace to process
    pub trace_file: PathBuf,

    /// Maximum size of each chunk
    pub split_size: ChunkSize,

    /// Renderer script and width
    pub flamegraph: FlamegraphConfig,

    /// Program used to split the trace
    pub splitter: String,

    /// Viewer program; `None` skips opening images
    pub viewer: Option<String>,

    /// Pause between viewer launches
    pub launch_delay: Duration,

    /// Directory the workspace is created in
    pub output_root: PathBuf,
}

impl Default for SplitArgs {
    fn default() -> Self {
        Self {
            trace_file: PathBuf::new(),
            split_size: ChunkSize::default(),
            flamegraph: FlamegraphConfig::default(),
            splitter: DEFAULT_SPLITTER.to_string(),
            viewer: Some(DEFAULT_VIEWER.to_string()),
            launch_delay: DEFAULT_LAUNCH_DELAY,
            output_root: PathBuf::from("."),
        }
    }
}

/// What a completed run produced
#[derive(Debug)]
pub struct SplitOutcome {
    pub workspace: PathBuf,
    pub decompressed_bytes: u64,
    pub chunks: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
    pub failed_chunks: Vec<PathBuf>,
    pub launched: Vec<PathBuf>,
    pub viewer_failures: Vec<ViewerError>,
}
