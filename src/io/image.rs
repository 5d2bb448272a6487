//! Tile loading and raster export
//!
//! The loader normalizes any decodable image to an RGBA f64 array in
//! [0, 1]; the exporter accepts 1, 3, or 4 channel rasters so cores fed
//! with grayscale tiles can still be written out.

use crate::io::error::{Result, SpiralError};
use image::{ImageBuffer, Rgba};
use ndarray::Array3;
use std::path::Path;

/// Load a tile image as a (height, width, 4) array of [0, 1] samples
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn load_tile<P: AsRef<Path>>(path: P) -> Result<Array3<f64>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| SpiralError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgba_img = img.to_rgba8();

    let (width, height) = (rgba_img.width() as usize, rgba_img.height() as usize);
    let mut tile = Array3::zeros((height, width, 4));

    for (x, y, pixel) in rgba_img.enumerate_pixels() {
        let channels = pixel.0;
        for c in 0..4 {
            let val = channels.get(c).copied().unwrap_or(0);
            if let Some(sample) = tile.get_mut((y as usize, x as usize, c)) {
                *sample = f64::from(val) / 255.0;
            }
        }
    }

    Ok(tile)
}

// Clamp a [0, 1] sample into a display byte
fn to_byte(value: f64) -> u8 {
    if value.is_finite() {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    } else {
        0
    }
}

/// Export a generated raster as a PNG image
///
/// Grayscale (1 channel) rasters are replicated across RGB with full
/// opacity; 3 channel rasters get full opacity; 4 channel rasters are
/// written as-is. The parent directory is created if missing.
///
/// # Errors
///
/// Returns an error if:
/// - The raster has a channel count other than 1, 3, or 4
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster<P: AsRef<Path>>(raster: &Array3<f64>, output_path: P) -> Result<()> {
    let (height, width, channels) = raster.dim();
    if !matches!(channels, 1 | 3 | 4) {
        return Err(SpiralError::UnsupportedChannels { channels });
    }

    let mut img = ImageBuffer::new(width as u32, height as u32);

    for row in 0..height {
        for col in 0..width {
            let sample = |c: usize| raster.get((row, col, c)).copied().unwrap_or(0.0);
            let pixel = match channels {
                1 => {
                    let v = to_byte(sample(0));
                    Rgba([v, v, v, 255])
                }
                3 => Rgba([
                    to_byte(sample(0)),
                    to_byte(sample(1)),
                    to_byte(sample(2)),
                    255,
                ]),
                _ => Rgba([
                    to_byte(sample(0)),
                    to_byte(sample(1)),
                    to_byte(sample(2)),
                    to_byte(sample(3)),
                ]),
            };
            img.put_pixel(col as u32, row as u32, pixel);
        }
    }

    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SpiralError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| SpiralError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
