//! Error types for the generation pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a generation run
#[derive(Debug, Error)]
pub enum Error {
    /// The repository URL did not match any known pattern
    #[error("Could not parse repository URL: {0}")]
    InvalidUrl(String),

    /// The scratch directory would swallow the output directory on cleanup
    #[error("Work directory {work_dir} must not contain the output directory {output_dir}")]
    UnsafeWorkDir {
        work_dir: PathBuf,
        output_dir: PathBuf,
    },

    /// Every checkout attempt failed
    #[error("Failed to clone repository {url} (tried {attempts} strategies)")]
    CloneFailed { url: String, attempts: usize },

    /// The requested documentation root does not exist in the checkout
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// The documentation root contains no matching files
    #[error("No .{extension} files found in {root}")]
    NoDocuments { extension: String, root: PathBuf },

    /// One or more requested artifacts could not be written
    #[error("Failed to write {}", .0.join(", "))]
    OutputFailed(Vec<String>),

    /// Configuration file could not be parsed
    #[error("Failed to parse config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
