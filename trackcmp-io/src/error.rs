use std::io;
use thiserror::Error;

/// Error type for trackcmp-io operations.
#[derive(Error, Debug)]
pub enum TrackIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file extension maps to no known track format.
    #[error("Unsupported track extension: {0}")]
    UnsupportedExtension(String),

    /// A `.const` track was opened without a genome length.
    #[error("A genome length is required for constant-value tracks")]
    MissingGenomeLength,

    /// A segment coordinate field failed to parse as an integer.
    #[error("Error parsing segment coordinate: {0:?}")]
    CoordinateParse(String),

    /// A value field failed to parse as a float.
    #[error("Error parsing track value: {0:?}")]
    ValueParse(String),
}

/// Result type alias for trackcmp-io operations.
pub type Result<T> = std::result::Result<T, TrackIoError>;
