//! Opening rendered flamegraphs in a viewer.
//!
//! Viewer processes are spawned detached and never waited on: the child
//! handle is dropped immediately, so each browser window outlives this
//! process and is never reaped by it.

use crate::utils::config::NO_IMAGES_MESSAGE;
use crate::utils::error::ViewerError;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// Something that can open an image
pub trait Launcher {
    fn launch(&mut self, image: &Path) -> Result<(), ViewerError>;
}

/// Spawns `<program> <image>` with stdio detached
#[derive(Debug, Clone)]
pub struct DetachedViewer {
    program: String,
}

impl DetachedViewer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Launcher for DetachedViewer {
    fn launch(&mut self, image: &Path) -> Result<(), ViewerError> {
        let child = Command::new(&self.program)
            .arg(image)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ViewerError::Spawn {
                program: self.program.clone(),
                image: image.to_path_buf(),
                source,
            })?;

        // `child` goes out of scope here; that neither kills nor waits on it
        debug!("Viewer pid {} opened {}", child.id(), image.display());
        Ok(())
    }
}

/// Result of the launch stage
#[derive(Debug, Default)]
pub struct LaunchReport {
    pub launched: Vec<PathBuf>,
    pub failures: Vec<ViewerError>,
}

/// Launch one viewer per image, in order, `delay` apart
///
/// Returns an empty report (and prints a diagnostic) when there are no
/// images. A launch failure is logged and the remaining images are still
/// attempted.
pub fn open_images<L: Launcher + ?Sized>(
    images: &[PathBuf],
    launcher: &mut L,
    delay: Duration,
) -> LaunchReport {
    let mut report = LaunchReport::default();

    if images.is_empty() {
        println!("{}", NO_IMAGES_MESSAGE);
        return report;
    }

    info!("Opening {} flamegraphs", images.len());

    for (i, image) in images.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }

        match launcher.launch(image) {
            Ok(()) => report.launched.push(image.clone()),
            Err(e) => {
                warn!("{}", e);
                report.failures.push(e);
            }
        }
    }

    report
}
