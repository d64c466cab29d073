//! Build error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the site.
///
/// Every variant carries the path it concerns so the caller can log it
/// meaningfully. Whether an error aborts the build is decided by the
/// [`Generator`](crate::generator::Generator), not here.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("template file not found at {0:?}")]
    TemplateNotFound(PathBuf),

    #[error("error reading template {path:?}: {source}")]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("content directory not found at {0:?}")]
    ContentDirNotFound(PathBuf),

    #[error("content path {0:?} is not a directory")]
    ContentNotADirectory(PathBuf),

    #[error("error reading content directory {path:?}: {source}")]
    ReadContentDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("error creating build directory {path:?}: {source}")]
    CreateBuildDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error writing output file {path:?}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
