//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Fatal conditions checked before any work is done
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error(
        "FlameGraph script not found at {}\nPlease clone the FlameGraph repository using:\ngit clone {repo}",
        .path.display()
    )]
    RendererMissing { path: PathBuf, repo: String },

    #[error("FlameGraph script at {} is not a regular file", .0.display())]
    RendererNotFile(PathBuf),

    #[error(
        "The directory {} already exists.\nTo clean it up, you can run the following command:\nrm -rf {}\nPlease review and run this command manually if you want to clean up, then re-run.",
        .0.display(),
        .0.display()
    )]
    WorkspaceExists(PathBuf),

    #[error("Cannot derive a workspace name from input: {}", .0.display())]
    InvalidInputName(PathBuf),

    #[error("Failed to create workspace {}: {source}", .path.display())]
    WorkspaceCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while decompressing the input archive
#[derive(Error, Debug)]
pub enum DecompressError {
    #[error("Cannot open input archive {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create decompressed trace {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decompression of {} failed: {source}", .path.display())]
    Stream {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while chunking the decompressed trace
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to run splitter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Splitter `{program}` exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },

    #[error("Cannot list chunks in {}: {source}", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors for a single chunk's render invocation
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot open chunk {}: {source}", .chunk.display())]
    OpenChunk {
        chunk: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create image {}: {source}", .image.display())]
    CreateImage {
        image: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run renderer {}: {source}", .script.display())]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Renderer exited with {status} for chunk {}", .chunk.display())]
    ExitStatus { chunk: PathBuf, status: ExitStatus },
}

/// Errors launching the image viewer
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to launch viewer `{program}` for {}: {source}", .image.display())]
    Spawn {
        program: String,
        image: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors parsing a chunk size string such as `25M`
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SizeError {
    #[error("Chunk size cannot be empty")]
    Empty,

    #[error("Invalid chunk size: {0}")]
    Invalid(String),

    #[error("Chunk size must be greater than zero")]
    Zero,

    #[error("Chunk size is too large: {0}")]
    Overflow(String),
}

/// Errors writing or reading the run manifest
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
