// crates/furom-core/src/bitmap/orient.rs

use crate::bitmap::grid::PixelGrid;

/// Native grid -> viewable (top-left origin) orientation.
///
/// The packed layout's origin is inverted on both axes relative to a raster,
/// so this is a vertical flip followed by a horizontal flip.
pub fn to_raster_orientation(grid: &PixelGrid) -> PixelGrid {
    grid.flip_vertical().flip_horizontal()
}

/// Viewable orientation -> native grid. Same two flips, same order; the pair
/// is an involution so this undoes `to_raster_orientation` exactly.
pub fn from_raster_orientation(raster: &PixelGrid) -> PixelGrid {
    raster.flip_vertical().flip_horizontal()
}
