//! Locating the external `flamegraph.pl` renderer.

use crate::utils::config::FLAMEGRAPH_REPO;
use crate::utils::error::PreconditionError;
use log::debug;
use std::path::{Path, PathBuf};

/// Confirm the renderer script exists before any work starts
///
/// # Returns
/// The script path, ready to be invoked
///
/// # Errors
/// * `PreconditionError::RendererMissing` - nothing at `script`; the message
///   carries the `git clone` command that fixes it
/// * `PreconditionError::RendererNotFile` - `script` is a directory or similar
pub fn verify_flamegraph_script(script: &Path) -> Result<PathBuf, PreconditionError> {
    if !script.exists() {
        return Err(PreconditionError::RendererMissing {
            path: script.to_path_buf(),
            repo: FLAMEGRAPH_REPO.to_string(),
        });
    }

    if !script.is_file() {
        return Err(PreconditionError::RendererNotFile(script.to_path_buf()));
    }

    debug!("Using FlameGraph script: {}", script.display());
    Ok(script.to_path_buf())
}
