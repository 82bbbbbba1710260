//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default location of the FlameGraph renderer, relative to the working directory
pub const DEFAULT_FLAMEGRAPH_SCRIPT: &str = "FlameGraph/flamegraph.pl";

/// Upstream repository that provides `flamegraph.pl`
pub const FLAMEGRAPH_REPO: &str = "https://github.com/brendangregg/FlameGraph.git";

/// Suffix appended to the input's base name to form the workspace directory
pub const WORKSPACE_SUFFIX: &str = "_flamegraphs";

/// Filename prefix shared by every chunk the splitter writes
pub const CHUNK_PREFIX: &str = "trace_part_";

/// Extension of the decompressed Xdebug trace
pub const TRACE_EXTENSION: &str = "xt";

/// Extension of rendered images
pub const IMAGE_EXTENSION: &str = "svg";

/// Extension stripped from the input before deriving names
pub const ARCHIVE_EXTENSION: &str = "gz";

/// Manifest written into the workspace after rendering
pub const MANIFEST_FILE_NAME: &str = "run.json";

pub const DEFAULT_SPLIT_SIZE: &str = "25M";
pub const DEFAULT_WIDTH: usize = 1600;
pub const DEFAULT_SPLITTER: &str = "split";
pub const DEFAULT_VIEWER: &str = "chromium";

/// Pause between viewer launches so the browser isn't flooded with windows
pub const DEFAULT_LAUNCH_DELAY: Duration = Duration::from_millis(200);

// Streaming copy buffer for decompression (1 MiB)
pub const COPY_BUFFER_SIZE: usize = 1024 * 1024;

/// Printed when rendering left nothing to open
pub const NO_IMAGES_MESSAGE: &str =
    "No SVG files were generated. There might be an issue with the trace file or its format.";
