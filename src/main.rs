//! Flamegraph Splitter CLI
//!
//! Breaks an oversized gzipped Xdebug trace into chunks and renders a
//! flamegraph for each one.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use flamegraph_splitter::commands::{execute_split, validate_args, SplitArgs};
use flamegraph_splitter::flamegraph::FlamegraphConfig;
use flamegraph_splitter::utils::config::{
    DEFAULT_FLAMEGRAPH_SCRIPT, DEFAULT_SPLITTER, DEFAULT_SPLIT_SIZE, DEFAULT_VIEWER,
};
use flamegraph_splitter::utils::ChunkSize;

/// Create flamegraphs from a gzipped trace file
#[derive(Parser, Debug)]
#[command(name = "flamegraph-splitter")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The gzipped trace file to process
    trace_file: PathBuf,

    /// Size of split files (e.g. 25M, 500K, 50MB)
    #[arg(long, default_value = DEFAULT_SPLIT_SIZE)]
    split_size: ChunkSize,

    /// Flamegraph width in pixels
    #[arg(long, default_value = "1600")]
    width: usize,

    /// Path to FlameGraph's flamegraph.pl
    #[arg(long, env = "FLAMEGRAPH_SCRIPT", default_value = DEFAULT_FLAMEGRAPH_SCRIPT)]
    flamegraph_script: PathBuf,

    /// Program used to split the trace
    #[arg(long, default_value = DEFAULT_SPLITTER)]
    splitter: String,

    /// Program used to open each SVG
    #[arg(long, env = "FLAMEGRAPH_VIEWER", default_value = DEFAULT_VIEWER)]
    viewer: String,

    /// Delay between viewer launches in milliseconds
    #[arg(long, default_value = "200")]
    launch_delay_ms: u64,

    /// Directory to create the workspace in
    #[arg(long, default_value = ".")]
    output_root: PathBuf,

    /// Render only, don't open the SVGs
    #[arg(long)]
    no_open: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = SplitArgs {
        trace_file: cli.trace_file,
        split_size: cli.split_size,
        flamegraph: FlamegraphConfig::new(cli.flamegraph_script).with_width(cli.width),
        splitter: cli.splitter,
        viewer: (!cli.no_open).then_some(cli.viewer),
        launch_delay: Duration::from_millis(cli.launch_delay_ms),
        output_root: cli.output_root,
    };

    // Validate args first
    validate_args(&args)?;

    let outcome = execute_split(&args)?;

    if !outcome.failed_chunks.is_empty() {
        log::warn!(
            "{} of {} chunks failed to render",
            outcome.failed_chunks.len(),
            outcome.chunks.len()
        );
    }

    Ok(())
}
