//! Sample window and output raster geometry
//!
//! The sample window is the rectangle of the complex plane the output
//! raster is drawn from: columns sample the real (x) axis, rows sample
//! the imaginary (y) axis.

use crate::io::configuration::{DEFAULT_RANGE, DEFAULT_SIZE, MAX_OUTPUT_DIMENSION};
use crate::io::error::{Result, invalid_parameter};

/// Closed rectangular region of the complex plane to sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleWindow {
    /// Real-axis interval (min, max)
    pub x: (f64, f64),
    /// Imaginary-axis interval (min, max)
    pub y: (f64, f64),
}

impl SampleWindow {
    /// Create a window from explicit axis intervals
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Create a window spanning (-range, range) on both axes
    pub const fn symmetric(range: f64) -> Self {
        Self {
            x: (-range, range),
            y: (-range, range),
        }
    }

    /// Check that both intervals are finite and properly ordered
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any bound is non-finite or an
    /// interval has min >= max
    pub fn validate(&self) -> Result<()> {
        for (name, (lo, hi)) in [("window.x", self.x), ("window.y", self.y)] {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(invalid_parameter(
                    name,
                    &format!("({lo}, {hi})"),
                    &"bounds must be finite",
                ));
            }
            if lo >= hi {
                return Err(invalid_parameter(
                    name,
                    &format!("({lo}, {hi})"),
                    &"min must be strictly less than max",
                ));
            }
        }
        Ok(())
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::symmetric(DEFAULT_RANGE)
    }
}

/// Dimensions of the generated raster in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    /// Number of columns (real-axis samples)
    pub width: usize,
    /// Number of rows (imaginary-axis samples)
    pub height: usize,
}

impl OutputSize {
    /// Create an output size from width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are positive and within the safety cap
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_OUTPUT_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("size.width", self.width), ("size.height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(name, &value, &"must be positive"));
            }
            if value > MAX_OUTPUT_DIMENSION {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &format!("exceeds maximum dimension {MAX_OUTPUT_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

/// Evenly spaced samples over a closed interval, endpoints included
///
/// A single-sample axis collapses to the interval start.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![start; count];
    }
    let step = (end - start) / ((count - 1) as f64);
    (0..count)
        .map(|i| {
            if i == count - 1 {
                end
            } else {
                (i as f64).mul_add(step, start)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_both_endpoints() {
        let axis = linspace(-30.0, 30.0, 7);
        assert_eq!(axis.len(), 7);
        assert!((axis.first().copied().unwrap_or(f64::NAN) - -30.0).abs() < f64::EPSILON);
        assert!((axis.last().copied().unwrap_or(f64::NAN) - 30.0).abs() < f64::EPSILON);
        assert!((axis.get(3).copied().unwrap_or(f64::NAN)).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn test_window_validation_rejects_inverted_bounds() {
        let window = SampleWindow::new((3.0, -3.0), (-3.0, 3.0));
        assert!(window.validate().is_err());
    }

    #[test]
    fn test_window_validation_rejects_non_finite_bounds() {
        let window = SampleWindow::new((f64::NEG_INFINITY, 3.0), (-3.0, 3.0));
        assert!(window.validate().is_err());
        let window = SampleWindow::new((-3.0, 3.0), (f64::NAN, 3.0));
        assert!(window.validate().is_err());
    }

    #[test]
    fn test_output_size_validation() {
        assert!(OutputSize::new(100, 100).validate().is_ok());
        assert!(OutputSize::new(0, 100).validate().is_err());
        assert!(
            OutputSize::new(crate::io::configuration::MAX_OUTPUT_DIMENSION + 1, 1)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let window = SampleWindow::default();
        assert!((window.x.0 - -30.0).abs() < f64::EPSILON);
        assert!((window.y.1 - 30.0).abs() < f64::EPSILON);
        let size = OutputSize::default();
        assert_eq!(size.width, 3000);
        assert_eq!(size.height, 3000);
    }
}
