// crates/furom-core/src/bitmap/permutation.rs

use crate::bitmap::grid::{HEIGHT, WIDTH};

/// Total number of addressable bits in one packed image.
pub const BIT_COUNT: usize = WIDTH * HEIGHT;

/// Per-column bit offset. Empirical; must match the device layout exactly.
pub const X_OFFSETS: [u16; WIDTH] = [
    27, 26, 25, 24, 7, 6, 5, 4, 3, 2, 1, 0, 15, 14, 13, 12, //
    11, 10, 9, 8, 28, 29, 30, 31, 16, 17, 18, 19, 20, 21, 22, //
    23, 55, 54, 53, 52, 51, 50, 49, 48, 63, 62, 61, 60, 40, 41, //
    42, 43, 44, 45, 46, 47, 32, 33, 34, 35, 36, 37, 38, 39, 56, //
    57, 58, 59,
];

/// Per-row bit offset. Rows 0..16 run bottom-up through the first half of the
/// record, rows 16..32 top-down through the second half.
pub const Y_OFFSETS: [u16; HEIGHT] = [
    960, 896, 832, 768, 704, 640, 576, 512, 448, 384, 320, 256, //
    192, 128, 64, 0, 1024, 1088, 1152, 1216, 1280, 1344, 1408, //
    1472, 1536, 1600, 1664, 1728, 1792, 1856, 1920, 1984,
];

/// Bit position -> (col, row). Derived from the offset tables at compile time.
pub static INVERSE: [(u8, u8); BIT_COUNT] = build_inverse();

/// Global bit position of pixel `(col, row)` inside a packed image.
///
/// Panics if `col >= 64` or `row >= 32`.
#[inline]
pub fn bit_index(col: usize, row: usize) -> usize {
    X_OFFSETS[col] as usize + Y_OFFSETS[row] as usize
}

/// Pixel coordinate stored at global bit position `pos`.
#[inline]
pub fn coord_of(pos: usize) -> (usize, usize) {
    let (col, row) = INVERSE[pos];
    (col as usize, row as usize)
}

const fn build_inverse() -> [(u8, u8); BIT_COUNT] {
    let mut inv = [(0u8, 0u8); BIT_COUNT];
    let mut col = 0;
    while col < WIDTH {
        let mut row = 0;
        while row < HEIGHT {
            let pos = X_OFFSETS[col] as usize + Y_OFFSETS[row] as usize;
            inv[pos] = (col as u8, row as u8);
            row += 1;
        }
        col += 1;
    }
    inv
}
