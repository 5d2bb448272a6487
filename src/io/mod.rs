//! Input/output operations and error handling

/// Command-line interface for spiralizing tile images
pub mod cli;
/// Default parameter values and safety limits
pub mod configuration;
/// Error types for mapping and I/O operations
pub mod error;
/// Tile loading and raster export
pub mod image;
/// Progress reporting for batch runs
pub mod progress;
/// Session state holding the currently loaded tile
pub mod session;
