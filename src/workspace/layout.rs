//! Workspace directory naming and creation.
//!
//! The workspace for `foo.xt.gz` is `<root>/foo_flamegraphs`. It is created
//! exactly once per run and never removed by the tool.

use crate::utils::config::{
    ARCHIVE_EXTENSION, CHUNK_PREFIX, IMAGE_EXTENSION, MANIFEST_FILE_NAME, TRACE_EXTENSION,
    WORKSPACE_SUFFIX,
};
use crate::utils::error::PreconditionError;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// All artifact paths for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    dir: PathBuf,
    base_name: String,
}

impl Workspace {
    /// Compute the workspace for `input` under `root` without touching disk
    pub fn for_input(input: &Path, root: &Path) -> Result<Self, PreconditionError> {
        let base_name = derive_base_name(input)
            .ok_or_else(|| PreconditionError::InvalidInputName(input.to_path_buf()))?;

        Ok(Self {
            dir: root.join(format!("{}{}", base_name, WORKSPACE_SUFFIX)),
            base_name,
        })
    }

    /// Fail if the directory already exists, otherwise create it
    ///
    /// The parent must already exist. An existing directory is left untouched.
    pub fn create(&self) -> Result<(), PreconditionError> {
        self.ensure_absent()?;

        debug!("Creating workspace: {}", self.dir.display());
        fs::create_dir(&self.dir).map_err(|source| PreconditionError::WorkspaceCreate {
            path: self.dir.clone(),
            source,
        })?;

        info!("Workspace created: {}", self.dir.display());
        Ok(())
    }

    /// Error out when a previous run's output is still present
    pub fn ensure_absent(&self) -> Result<(), PreconditionError> {
        // symlink_metadata so a dangling link still counts as "exists"
        if fs::symlink_metadata(&self.dir).is_ok() {
            return Err(PreconditionError::WorkspaceExists(self.dir.clone()));
        }
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Decompressed trace: `<dir>/<base>.xt`
    pub fn trace_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.base_name, TRACE_EXTENSION))
    }

    /// Prefix the splitter writes chunks under: `<dir>/trace_part_`
    pub fn chunk_prefix(&self) -> PathBuf {
        self.dir.join(CHUNK_PREFIX)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE_NAME)
    }

    /// Shell command the user can run to remove this workspace
    pub fn cleanup_command(&self) -> String {
        format!("rm -rf {}", self.dir.display())
    }
}

/// Image path for a chunk: `<chunk>.svg` next to the chunk
pub fn image_path_for(chunk: &Path) -> PathBuf {
    let mut name = chunk.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(IMAGE_EXTENSION);
    chunk.with_file_name(name)
}

/// Strip `.gz` then `.xt` from the input's file name
///
/// Returns `None` when nothing usable is left.
pub fn derive_base_name(input: &Path) -> Option<String> {
    let file_name = input.file_name()?.to_str()?;

    let without_gz = strip_extension(file_name, ARCHIVE_EXTENSION);
    let base = strip_extension(without_gz, TRACE_EXTENSION);

    if base.is_empty() || base == "." || base == ".." {
        None
    } else {
        Some(base.to_string())
    }
}

fn strip_extension<'a>(name: &'a str, ext: &str) -> &'a str {
    name.strip_suffix(ext)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(name)
}
