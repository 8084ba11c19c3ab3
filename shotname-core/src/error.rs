use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single entry could not be renamed.
///
/// None of these stop a run; the operation records them per entry and moves on.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("source file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "failed to rename {} to {}: {source}; the file was left at {}",
        from.display(),
        to.display(),
        temp.display()
    )]
    Stranded {
        from: PathBuf,
        to: PathBuf,
        temp: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("invalid file name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },
}
