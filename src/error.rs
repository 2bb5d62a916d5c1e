use owo_colors::OwoColorize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents any kind of error the converter may hit
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Not the converter's fault, some std::io went wrong
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not decode '{}' with any of the candidate encodings", .0.display().bright_blue())]
    Decode(PathBuf),

    #[error("No library directory was selected")]
    NoLibrarySelected,

    #[error("'{}' is not a directory", .0.display().bright_blue())]
    NotADirectory(PathBuf),
}
