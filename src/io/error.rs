//! Error types and path context for collage operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode a composite or animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Caller supplied input that violates a precondition
    ///
    /// Covers empty image lists, zero tile sizes and tiles that do not fit
    /// inside the cropped sources.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The requested configuration derives a zero-sized canvas or grid
    DegenerateGeometry {
        /// Name of the compositor or operation that rejected the geometry
        operation: &'static str,
        /// Description of the degenerate quantity
        reason: String,
    },

    /// No candidate source images were found
    NoSourceImages {
        /// Directory that was scanned
        directory: PathBuf,
    },

    /// Every attempt to acquire a usable source image failed
    SourceExhausted {
        /// Number of files tried before giving up
        attempts: usize,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DegenerateGeometry { operation, reason } => {
                write!(f, "Degenerate geometry in {operation}: {reason}")
            }
            Self::NoSourceImages { directory } => {
                write!(
                    f,
                    "No source images with a recognised extension in '{}'",
                    directory.display()
                )
            }
            Self::SourceExhausted { attempts } => {
                write!(
                    f,
                    "No usable source image found after {attempts} attempts"
                )
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

/// Attaches the offending path to lower-level image and I/O errors
pub trait WithPath<T> {
    /// Map a decoding failure to [`CollageError::ImageLoad`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path attached
    fn loading(self, path: &Path) -> Result<T>;

    /// Map an encoding failure to [`CollageError::ImageExport`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path attached
    fn exporting(self, path: &Path) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, image::ImageError> {
    fn loading(self, path: &Path) -> Result<T> {
        self.map_err(|source| CollageError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exporting(self, path: &Path) -> Result<T> {
        self.map_err(|source| CollageError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate geometry error
pub fn degenerate(operation: &'static str, reason: &impl ToString) -> CollageError {
    CollageError::DegenerateGeometry {
        operation,
        reason: reason.to_string(),
    }
}

/// Wrap an I/O failure with the path and operation that produced it
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> CollageError {
    CollageError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
