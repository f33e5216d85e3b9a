//! Error types for the pixelation engine.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for jobs and settings.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings (resolutions, filter, format)
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the pixelation engine.
///
/// All errors in the crate are converted to this type before being
/// returned to the shell. The variants mirror the stages of a job:
/// decode the source, create the output directory, encode each output.
#[derive(Error, Debug, Serialize)]
pub enum PixelError {
    /// Job or input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Source image could not be opened or decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Output directory could not be created
    #[error("Directory error: {0}")]
    Directory(String),

    /// Output image could not be encoded or written
    #[error("Encode error: {0}")]
    Encode(String),
}

/// Convenience result type for pixelation operations.
pub type PixelResult<T> = Result<T, PixelError>;

// Helper methods for error creation
impl PixelError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn directory<T: Into<String>>(msg: T) -> Self {
        Self::Directory(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to PixelError
impl From<PathError> for PixelError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
