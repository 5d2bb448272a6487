//! Numerical conformal-mapping pipeline for spiral tilings

/// Sample window, output size, and linear axis construction
pub mod grid;
/// Closed set of selectable analytic lens functions
pub mod lens;
/// The spiral transform: rotate, scale, wrap, gather
pub mod spiral;

pub use grid::{OutputSize, SampleWindow};
pub use lens::Lens;
pub use spiral::{SpiralParams, spiral_tiling};
