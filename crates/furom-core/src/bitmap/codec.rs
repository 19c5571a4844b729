// crates/furom-core/src/bitmap/codec.rs

use crate::bitmap::grid::PixelGrid;
use crate::bitmap::permutation::{bit_index, coord_of, BIT_COUNT};
use crate::error::{FuromError, Result};

/// Size of one packed image record.
pub const PACKED_LEN: usize = BIT_COUNT / 8;

/// Unpack a 256-byte image record into its native-orientation grid.
///
/// Bit order is MSB-first within each byte:
/// - global bit `p` lives in byte `p / 8` at mask `0x80 >> (p % 8)`.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid> {
    let packed: &[u8; PACKED_LEN] = bytes.try_into().map_err(|_| {
        FuromError::Format(format!(
            "packed image must be exactly {} bytes, got {}",
            PACKED_LEN,
            bytes.len()
        ))
    })?;
    Ok(decode_packed(packed))
}

pub fn decode_packed(packed: &[u8; PACKED_LEN]) -> PixelGrid {
    PixelGrid::from_fn(|col, row| read_bit(packed, bit_index(col, row)))
}

/// Pack a native-orientation grid back into a 256-byte record.
///
/// Walks the bit positions in order and pulls each one from the inverse map,
/// so every output bit is written exactly once.
pub fn encode_image(grid: &PixelGrid) -> [u8; PACKED_LEN] {
    let mut out = [0u8; PACKED_LEN];
    for pos in 0..BIT_COUNT {
        let (col, row) = coord_of(pos);
        if grid.get(col, row) {
            out[pos / 8] |= 0x80 >> (pos % 8);
        }
    }
    out
}

#[inline]
fn read_bit(packed: &[u8; PACKED_LEN], pos: usize) -> bool {
    (packed[pos / 8] >> (7 - pos % 8)) & 1 == 1
}
