//! Crate-level error type and `Result` alias.
//!
//! Only conditions that end a batch run are errors. Per-file skips and write
//! failures are reported as `batch::FileOutcome` values instead.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors of the corpus reader and the tagger
#[derive(Debug, Error)]
pub enum Error {
  /// The corpus path is missing or not a directory
  #[error("{} does not exist or is not a directory", .0.display())]
  NotADirectory(PathBuf),

  /// The corpus directory itself could not be listed
  #[error("could not list directory {}: {source}", path.display())]
  Listing {
    /// directory being listed
    path: PathBuf,
    /// underlying walk error
    #[source]
    source: walkdir::Error,
  },

  /// A corpus file could not be read
  #[error("could not read file {}: {source}", path.display())]
  Read {
    /// file being read
    path: PathBuf,
    /// underlying I/O error
    #[source]
    source: io::Error,
  },

  /// The Senna model directory is not available
  #[error("Senna models not found at {}", .0.display())]
  MissingModels(PathBuf),
}
