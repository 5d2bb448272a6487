//! The spiral transform: map, rotate, scale, wrap, gather
//!
//! Follows the Escher-like spiral tiling construction: the sample grid
//! is pushed through an analytic lens (the complex logarithm by
//! default), rotated so the integer lattice vector (a, b) lines up with
//! the imaginary axis, scaled so one winding covers a whole number of
//! tile periods, and wrapped into tile index space for the gather.

use crate::io::configuration::{DEFAULT_A, DEFAULT_B, DEFAULT_SCALE};
use crate::io::error::{Result, invalid_parameter};
use crate::mapping::grid::{OutputSize, SampleWindow, linspace};
use crate::mapping::lens::Lens;
use ndarray::Array3;
use num_complex::Complex64;
use std::f64::consts::TAU;

/// Integer spiral parameters and winding scale
///
/// `a` and `b` form the complex rotation factor `b + a·i`; `scale`
/// controls how many tile periods map into one spiral winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    /// Imaginary part of the rotation factor
    pub a: i32,
    /// Real part of the rotation factor
    pub b: i32,
    /// Winding scale, finite and positive
    pub scale: f64,
}

impl SpiralParams {
    /// Create spiral parameters
    pub const fn new(a: i32, b: i32, scale: f64) -> Self {
        Self { a, b, scale }
    }

    /// Check that the winding scale is finite and positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `scale` is non-finite or not
    /// strictly positive
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"must be finite and positive",
            ));
        }
        Ok(())
    }
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self::new(DEFAULT_A, DEFAULT_B, DEFAULT_SCALE)
    }
}

/// Wrap a mapped coordinate into `[0, modulus)` tile index space
///
/// Euclidean modulo, so negative coordinates wrap to the upper end of
/// the range. Non-finite coordinates fall back to index 0, as does a
/// rounded remainder landing exactly on the modulus.
pub fn wrap_index(value: f64, modulus: usize) -> usize {
    if !value.is_finite() || modulus == 0 {
        return 0;
    }
    let remainder = value.rem_euclid(modulus as f64);
    let index = remainder.floor() as usize;
    // rem_euclid can round up to the modulus for tiny negative inputs
    if index >= modulus { 0 } else { index }
}

/// Create a spiral tiling from a source tile
///
/// The tile has shape (height, width, channels) and is treated as
/// periodic on both spatial axes. Rows of the output raster follow the
/// imaginary (y) axis with y increasing downward, columns follow the
/// real (x) axis, so the sample at (row, col) is
/// `z = x[col] + i·y[row]`. The output has shape
/// (size.height, size.width, channels) with the channel depth inherited
/// from the tile.
///
/// The transform is pure and deterministic: the tile is never mutated
/// and identical inputs produce bit-identical rasters.
///
/// # Errors
///
/// Returns `InvalidParameter` if the tile has any zero dimension, the
/// sample window is inverted or non-finite, the output size is zero or
/// over the safety cap, or the scale is non-positive. After validation
/// the computation cannot fail.
pub fn spiral_tiling(
    tile: &Array3<f64>,
    params: &SpiralParams,
    window: &SampleWindow,
    size: &OutputSize,
    lens: Lens,
) -> Result<Array3<f64>> {
    let (tile_h, tile_w, channels) = tile.dim();
    if tile_h == 0 || tile_w == 0 || channels == 0 {
        return Err(invalid_parameter(
            "tile",
            &format!("{tile_h}x{tile_w}x{channels}"),
            &"tile dimensions must all be positive",
        ));
    }
    window.validate()?;
    size.validate()?;
    params.validate()?;

    let xs = linspace(window.x.0, window.x.1, size.width);
    let ys = linspace(window.y.0, window.y.1, size.height);

    // Rotate so the lattice vector (a, b) aligns with the imaginary axis
    let rotation = Complex64::new(f64::from(params.b), f64::from(params.a));
    // One 2π winding of the post-lens angular coordinate spans
    // tile_h * scale pixels of the tile
    let stretch = (tile_h as f64) * params.scale / TAU;

    let mut output = Array3::zeros((size.height, size.width, channels));
    for (row, &y) in ys.iter().enumerate() {
        for (col, &x) in xs.iter().enumerate() {
            let mapped = lens.apply(Complex64::new(x, y)) * rotation * stretch;
            let xi = wrap_index(mapped.re, tile_w);
            let yi = wrap_index(mapped.im, tile_h);
            for c in 0..channels {
                let value = tile.get((yi, xi, c)).copied().unwrap_or(0.0);
                if let Some(pixel) = output.get_mut((row, col, c)) {
                    *pixel = value;
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index_negative_coordinates_wrap_upward() {
        // -k wraps to T - k for 0 < k < T
        assert_eq!(wrap_index(-3.0, 10), 7);
        assert_eq!(wrap_index(-0.5, 10), 9);
        assert_eq!(wrap_index(-10.0, 10), 0);
        assert_eq!(wrap_index(-13.0, 10), 7);
    }

    #[test]
    fn test_wrap_index_boundary_wraps_to_zero() {
        assert_eq!(wrap_index(10.0, 10), 0);
        assert_eq!(wrap_index(20.0, 10), 0);
        assert_eq!(wrap_index(9.999_999, 10), 9);
    }

    #[test]
    fn test_wrap_index_non_finite_falls_back_to_zero() {
        assert_eq!(wrap_index(f64::NAN, 10), 0);
        assert_eq!(wrap_index(f64::INFINITY, 10), 0);
        assert_eq!(wrap_index(f64::NEG_INFINITY, 10), 0);
    }

    #[test]
    fn test_wrap_index_always_in_bounds() {
        let values = [
            -1e9, -1234.567, -1.0, -1e-12, 0.0, 0.999, 7.0, 1e6, 1e15,
        ];
        for modulus in [1usize, 3, 8, 255] {
            for &value in &values {
                assert!(wrap_index(value, modulus) < modulus);
            }
        }
    }

    #[test]
    fn test_log_map_self_similarity_at_sample_points() {
        // With a=0, b=1, scale=1 and a square tile of side T, scaling a
        // sample point by e^{2π} adds exactly T to the real coordinate,
        // so the wrapped index is unchanged. Points are chosen away from
        // floor boundaries so rounding cannot flip the index.
        let t = 8usize;
        let stretch = (t as f64) / TAU;
        let scale_factor = TAU.exp();
        let points = [
            Complex64::new(1.37, 0.42),
            Complex64::new(-2.6, 1.9),
            Complex64::new(0.11, -3.3),
            Complex64::new(5.05, 5.05),
        ];
        for z in points {
            let base = Lens::Log.apply(z) * stretch;
            let scaled = Lens::Log.apply(z * scale_factor) * stretch;
            assert_eq!(
                wrap_index(base.re, t),
                wrap_index(scaled.re, t),
                "real index changed for z = {z}"
            );
            assert_eq!(
                wrap_index(base.im, t),
                wrap_index(scaled.im, t),
                "imaginary index changed for z = {z}"
            );
        }
    }

    #[test]
    fn test_scale_validation() {
        assert!(SpiralParams::new(3, 5, 1.0).validate().is_ok());
        assert!(SpiralParams::new(3, 5, 0.0).validate().is_err());
        assert!(SpiralParams::new(3, 5, -2.0).validate().is_err());
        assert!(SpiralParams::new(3, 5, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_empty_tile_is_rejected_before_computation() {
        let tile = Array3::<f64>::zeros((0, 4, 3));
        let result = spiral_tiling(
            &tile,
            &SpiralParams::default(),
            &SampleWindow::default(),
            &OutputSize::new(10, 10),
            Lens::Log,
        );
        assert!(result.is_err());
    }
}
