#![allow(dead_code)]

use flamegraph_splitter::commands::SplitArgs;
use flamegraph_splitter::flamegraph::FlamegraphConfig;
use flamegraph_splitter::output::Launcher;
use flamegraph_splitter::utils::ViewerError;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Stand-in for flamegraph.pl: wraps stdin in an <svg> element, fails on "BROKEN"
pub const FAKE_RENDERER: &str = r#"#!/bin/sh
input=$(cat)
case "$input" in
  *BROKEN*) echo "bad chunk" >&2; exit 2 ;;
esac
printf '<svg %s>%s</svg>\n' "$1" "$(printf '%s' "$input" | wc -c)"
"#;

/// Records every image it is asked to open
#[derive(Default)]
pub struct RecordingLauncher {
    pub opened: Vec<(PathBuf, Instant)>,
}

impl RecordingLauncher {
    pub fn paths(&self) -> Vec<PathBuf> {
        self.opened.iter().map(|(p, _)| p.clone()).collect()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, image: &Path) -> Result<(), ViewerError> {
        self.opened.push((image.to_path_buf(), Instant::now()));
        Ok(())
    }
}

pub fn write_gzip(path: &Path, content: &[u8]) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(content).unwrap();
    fs::write(path, encoder.finish().unwrap()).unwrap();
}

#[cfg(unix)]
pub fn install_renderer(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script_dir = dir.join("FlameGraph");
    fs::create_dir_all(&script_dir).unwrap();
    let script = script_dir.join("flamegraph.pl");
    fs::write(&script, FAKE_RENDERER).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Args rooted in `dir`, with a gzipped `foo.xt.gz` holding `content`
pub fn args_for(dir: &Path, script: PathBuf, content: &[u8], split_size: &str) -> SplitArgs {
    let trace_file = dir.join("foo.xt.gz");
    write_gzip(&trace_file, content);

    SplitArgs {
        trace_file,
        split_size: split_size.parse().unwrap(),
        flamegraph: FlamegraphConfig::new(script),
        output_root: dir.to_path_buf(),
        launch_delay: Duration::from_millis(20),
        ..Default::default()
    }
}

/// Line-oriented fake trace of roughly `bytes` bytes
pub fn fake_trace(bytes: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes + 64);
    let mut i = 0usize;
    while out.len() < bytes {
        out.extend_from_slice(format!("{}\t{}\t0\t0.0001\t393216\t{{main}}\n", i % 7, i).as_bytes());
        i += 1;
    }
    out.truncate(bytes);
    out
}
