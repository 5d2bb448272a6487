//! Error types for mapping and I/O operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all spiral tiling operations
#[derive(Debug)]
pub enum SpiralError {
    /// Failed to load a tile image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Mapping parameter validation failed
    ///
    /// Raised before any computation begins: zero-sized tiles, inverted
    /// sample windows, non-positive output sizes, and non-finite scale
    /// factors all surface here
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Raster has a channel layout the exporter cannot encode
    UnsupportedChannels {
        /// Number of channels in the raster
        channels: usize,
    },

    /// Failed to save a generated raster to disk
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
}

impl fmt::Display for SpiralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load tile '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnsupportedChannels { channels } => {
                write!(
                    f,
                    "Cannot export raster with {channels} channels (expected 1, 3, or 4)"
                )
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
        }
    }
}

impl std::error::Error for SpiralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for spiral tiling results
pub type Result<T> = std::result::Result<T, SpiralError>;

impl From<image::ImageError> for SpiralError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SpiralError {
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
) -> SpiralError {
    SpiralError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a generic path error for CLI target handling
pub fn io_error(msg: &str) -> SpiralError {
    SpiralError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_the_parameter() {
        let err = invalid_parameter("scale", &0.0, &"must be positive");
        let message = err.to_string();
        assert!(message.contains("scale"));
        assert!(message.contains("must be positive"));
    }

    #[test]
    fn test_unsupported_channels_message() {
        let err = SpiralError::UnsupportedChannels { channels: 2 };
        assert!(err.to_string().contains('2'));
    }
}
