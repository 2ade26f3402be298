//! Error types for catalog, output, rendering and wallpaper operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all wallpaper generation operations
#[derive(Debug)]
pub enum WallError {
    /// No images were found in the catalog directory
    EmptyCatalog {
        /// Directory that was scanned
        dir: PathBuf,
    },

    /// No output canvas was configured or detected
    NoOutputs,

    /// Failed to read an image's header or pixels
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered canvas to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Querying the system for connected outputs failed
    OutputDetection {
        /// Description of the failure
        reason: String,
    },

    /// Setting the wallpaper of one output failed
    Apply {
        /// Output whose wallpaper could not be set
        output: String,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for WallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog { dir } => {
                write!(
                    f,
                    "No images found in '{}'. Use 'load' to add images first.",
                    dir.display()
                )
            }
            Self::NoOutputs => write!(f, "No monitors detected."),
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
            Self::OutputDetection { reason } => {
                write!(f, "Output detection failed: {reason}")
            }
            Self::Apply { output, reason } => {
                write!(f, "Failed to set wallpaper for {output}: {reason}")
            }
        }
    }
}

impl std::error::Error for WallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for wallpaper generation results
pub type Result<T> = std::result::Result<T, WallError>;

impl From<image::ImageError> for WallError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for WallError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WallError {
    WallError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> WallError {
    WallError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
