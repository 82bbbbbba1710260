//! Split command implementation.
//!
//! The split command:
//! 1. Checks that the FlameGraph renderer is present
//! 2. Creates a fresh workspace directory
//! 3. Decompresses the trace into it
//! 4. Splits the trace into fixed-size chunks
//! 5. Renders each chunk and opens the results

use super::models::{SplitArgs, SplitOutcome};
use crate::archive::decompress_trace;
use crate::chunker::Splitter;
use crate::flamegraph::{render_chunks, verify_flamegraph_script};
use crate::output::{
    open_images, write_manifest, DetachedViewer, LaunchReport, Launcher, RunManifest,
};
use crate::utils::config::NO_IMAGES_MESSAGE;
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the split command, opening images with `args.viewer`
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing renderer script or pre-existing workspace
/// * Unreadable or corrupt input archive
/// * Splitter failure
///
/// Individual chunk render failures are reported but are not errors.
pub fn execute_split(args: &SplitArgs) -> Result<SplitOutcome> {
    match &args.viewer {
        Some(program) => {
            let mut viewer = DetachedViewer::new(program.clone());
            execute_split_with(args, Some(&mut viewer as &mut dyn Launcher))
        }
        None => execute_split_with(args, None),
    }
}

/// Execute the split command with a caller-supplied launcher
///
/// `None` skips the viewer stage.
pub fn execute_split_with(
    args: &SplitArgs,
    launcher: Option<&mut dyn Launcher>,
) -> Result<SplitOutcome> {
    let start_time = Instant::now();

    info!("Processing trace: {}", args.trace_file.display());

    // Step 1: Preconditions
    info!("Step 1/5: Checking for FlameGraph renderer...");
    let script = verify_flamegraph_script(&args.flamegraph.script)?;
    debug!("Renderer: {} (width {})", script.display(), args.flamegraph.width);

    // Step 2: Workspace
    info!("Step 2/5: Creating workspace...");
    let workspace = Workspace::for_input(&args.trace_file, &args.output_root)?;
    workspace.create()?;

    // Step 3: Decompress
    info!("Step 3/5: Decompressing trace...");
    let trace_path = workspace.trace_path();
    let decompressed_bytes = decompress_trace(&args.trace_file, &trace_path)
        .context("Failed to decompress trace")?;

    // Step 4: Split
    info!("Step 4/5: Splitting into {} chunks...", args.split_size);
    let splitter = Splitter::new(args.splitter.clone(), args.split_size.clone());
    let chunks = splitter
        .split(&trace_path, &workspace.chunk_prefix())
        .context("Failed to split trace")?;

    if chunks.is_empty() {
        warn!(
            "No chunks were produced from {} ({} bytes decompressed)",
            trace_path.display(),
            decompressed_bytes
        );
    }

    // Step 5: Render and open
    info!("Step 5/5: Rendering {} flamegraphs...", chunks.len());
    let report = render_chunks(&chunks, &args.flamegraph);

    for failure in &report.failures {
        println!("Failed to render {}: {}", failure.chunk.display(), failure.error);
    }

    let manifest = RunManifest::new(
        &args.trace_file,
        args.split_size.as_arg(),
        args.flamegraph.width,
        decompressed_bytes,
        &chunks,
        &report,
    );
    if let Err(e) = write_manifest(&manifest, &workspace.manifest_path()) {
        warn!("Could not write run manifest: {}", e);
    }

    let launch = match launcher {
        Some(launcher) => open_images(&report.images, launcher, args.launch_delay),
        None => {
            if report.is_empty() {
                println!("{}", NO_IMAGES_MESSAGE);
            } else {
                info!("Skipping viewer launch (--no-open)");
            }
            LaunchReport::default()
        }
    };

    println!("\nTo clean up temporary files, you can run the following command:");
    println!("{}", workspace.cleanup_command());

    let elapsed = start_time.elapsed();
    info!("Completed in {:.2}s", elapsed.as_secs_f64());

    Ok(SplitOutcome {
        workspace: workspace.dir().to_path_buf(),
        decompressed_bytes,
        chunks,
        images: report.images,
        failed_chunks: report.failures.into_iter().map(|f| f.chunk).collect(),
        launched: launch.launched,
        viewer_failures: launch.failures,
    })
}

/// Validate split arguments
///
/// **Public** - can be called before execute_split for early validation
pub fn validate_args(args: &SplitArgs) -> Result<()> {
    if args.trace_file.as_os_str().is_empty() {
        anyhow::bail!("Trace file path cannot be empty");
    }

    if !args.trace_file.is_file() {
        anyhow::bail!("Trace file not found: {}", args.trace_file.display());
    }

    if args.flamegraph.width == 0 {
        anyhow::bail!("Width must be greater than 0");
    }

    if args.splitter.trim().is_empty() {
        anyhow::bail!("Splitter program cannot be empty");
    }

    if matches!(&args.viewer, Some(v) if v.trim().is_empty()) {
        anyhow::bail!("Viewer program cannot be empty");
    }

    if !args.output_root.is_dir() {
        anyhow::bail!("Output directory not found: {}", args.output_root.display());
    }

    Ok(())
}
