//! Escher-like spiral tilings by conformal mapping of a source tile
//!
//! The system maps a periodic source tile through the complex logarithm
//! (or another selectable analytic lens), rotates the mapped plane so an
//! integer lattice direction lines up with the spiral axis, and gathers
//! tile pixels at the wrapped coordinates to produce a new raster.

#![forbid(unsafe_code)]

/// Input/output operations, session state, and error handling
pub mod io;
/// Core conformal mapping pipeline: sample grid, analytic lenses, spiral transform
pub mod mapping;

pub use io::error::{Result, SpiralError};
pub use mapping::spiral::spiral_tiling;
