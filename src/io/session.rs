//! Session state for the parameter surface
//!
//! A session owns the currently loaded tile across renders, so the
//! control surface regenerating once per user action never needs
//! process-wide mutable state and the core stays pure.

use crate::io::error::Result;
use crate::io::image::load_tile;
use crate::mapping::grid::{OutputSize, SampleWindow};
use crate::mapping::lens::Lens;
use crate::mapping::spiral::{SpiralParams, spiral_tiling};
use ndarray::Array3;
use std::path::{Path, PathBuf};

/// One render's worth of parameters for the spiral transform
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderRequest {
    /// Spiral rotation and winding scale parameters
    pub params: SpiralParams,
    /// Sample window of the complex plane
    pub window: SampleWindow,
    /// Output raster dimensions
    pub size: OutputSize,
    /// Analytic lens applied before the spiral step
    pub lens: Lens,
}

/// Holds the currently loaded tile and renders spirals from it
#[derive(Debug, Clone)]
pub struct Session {
    tile: Array3<f64>,
    tile_path: PathBuf,
}

impl Session {
    /// Create a session by loading a tile image from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the tile image cannot be loaded
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let tile = load_tile(&path)?;
        Ok(Self {
            tile,
            tile_path: path.as_ref().to_path_buf(),
        })
    }

    /// Create a session from an already constructed tile array
    pub fn from_tile(tile: Array3<f64>) -> Self {
        Self {
            tile,
            tile_path: PathBuf::new(),
        }
    }

    /// The currently loaded tile
    pub const fn tile(&self) -> &Array3<f64> {
        &self.tile
    }

    /// Path the current tile was loaded from, if any
    pub fn tile_path(&self) -> &Path {
        &self.tile_path
    }

    /// Replace the current tile with one loaded from disk
    ///
    /// The previous tile stays in place if loading fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement image cannot be loaded
    pub fn replace_tile<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.tile = load_tile(&path)?;
        self.tile_path = path.as_ref().to_path_buf();
        Ok(())
    }

    /// Render one spiral raster from the current tile
    ///
    /// # Errors
    ///
    /// Returns an error if the request's parameters fail validation
    pub fn render(&self, request: &RenderRequest) -> Result<Array3<f64>> {
        spiral_tiling(
            &self.tile,
            &request.params,
            &request.window,
            &request.size,
            request.lens,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_the_owned_tile() {
        let tile = Array3::from_elem((4, 4, 3), 0.25);
        let session = Session::from_tile(tile);
        let request = RenderRequest {
            size: OutputSize::new(8, 8),
            ..Default::default()
        };
        let raster = session.render(&request).unwrap();
        assert_eq!(raster.dim(), (8, 8, 3));
        assert!(raster.iter().all(|&v| (v - 0.25).abs() < f64::EPSILON));
    }

    #[test]
    fn test_missing_tile_file_reports_load_error() {
        let result = Session::load("definitely/not/here.png");
        assert!(result.is_err());
    }
}
