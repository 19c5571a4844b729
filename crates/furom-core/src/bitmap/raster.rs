// crates/furom-core/src/bitmap/raster.rs

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};

use crate::bitmap::grid::{PixelGrid, HEIGHT, WIDTH};
use crate::bitmap::orient::{from_raster_orientation, to_raster_orientation};
use crate::error::{FuromError, Result};

/// Luma values strictly above this are "on".
pub const THRESHOLD: u8 = 127;

const ON: u8 = 255;
const OFF: u8 = 0;

/// How raster ingestion treats images that are not exactly 64x32.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum IngestMode {
    /// Reject with `DimensionMismatch`. Required for exact round-trips.
    #[default]
    Strict,
    /// Resize to 64x32 before thresholding. Lossy; best-effort only.
    Lenient,
}

#[inline]
pub fn threshold(luma: u8) -> bool {
    luma > THRESHOLD
}

/// Render a native grid as a viewable single-channel 64x32 raster.
pub fn grid_to_raster(grid: &PixelGrid) -> GrayImage {
    view_to_raster(&to_raster_orientation(grid))
}

/// Render a grid that is already in viewable orientation.
pub fn view_to_raster(view: &PixelGrid) -> GrayImage {
    GrayImage::from_fn(WIDTH as u32, HEIGHT as u32, |x, y| {
        Luma([if view.get(x as usize, y as usize) { ON } else { OFF }])
    })
}

/// Turn a viewable raster back into a native grid.
///
/// Colour and grey inputs are coerced to luma first, then thresholded.
pub fn grid_from_raster(img: &DynamicImage, mode: IngestMode) -> Result<PixelGrid> {
    let mut luma = img.to_luma8();
    let (w, h) = luma.dimensions();

    if (w, h) != (WIDTH as u32, HEIGHT as u32) {
        match mode {
            IngestMode::Strict => {
                return Err(FuromError::DimensionMismatch {
                    expected_w: WIDTH as u32,
                    expected_h: HEIGHT as u32,
                    got_w: w,
                    got_h: h,
                });
            }
            IngestMode::Lenient => {
                tracing::warn!("raster is {}x{}, resizing to {}x{}", w, h, WIDTH, HEIGHT);
                luma = imageops::resize(&luma, WIDTH as u32, HEIGHT as u32, FilterType::CatmullRom);
            }
        }
    }

    let view = PixelGrid::from_fn(|col, row| threshold(luma.get_pixel(col as u32, row as u32)[0]));
    Ok(from_raster_orientation(&view))
}

/// Write a native grid as a raster file; format follows the path's extension.
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    save_view(&to_raster_orientation(grid), path)
}

pub fn save_view(view: &PixelGrid, path: &Path) -> Result<()> {
    view_to_raster(view).save(path)?;
    Ok(())
}

pub fn load_grid(path: &Path, mode: IngestMode) -> Result<PixelGrid> {
    let img = image::open(path)?;
    grid_from_raster(&img, mode)
}
