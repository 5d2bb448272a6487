//! Default parameter values and safety limits

/// Default 'a' spiral parameter (imaginary part of the rotation factor)
pub const DEFAULT_A: i32 = 3;
/// Default 'b' spiral parameter (real part of the rotation factor)
pub const DEFAULT_B: i32 = 5;

/// Default half-width of the symmetric sample window on both axes
pub const DEFAULT_RANGE: f64 = 30.0;

/// Default output raster edge length in pixels
pub const DEFAULT_SIZE: usize = 3000;

/// Default winding scale (tile repeats per spiral winding)
pub const DEFAULT_SCALE: f64 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output raster dimension
pub const MAX_OUTPUT_DIMENSION: usize = 20_000;

// Output settings
/// Suffix added to output filenames when no explicit outfile is given
pub const OUTPUT_SUFFIX: &str = "_spiral";
