// crates/furom-core/src/bitmap/grid.rs

use std::fmt;

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;

/// A 64x32 monochrome image. `true` is an "on" (white) pixel.
///
/// Each row is one `u64`, column `c` at bit `c`. Grids are values: the
/// transforms below return new grids and never touch `self`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelGrid {
    rows: [u64; HEIGHT],
}

impl PixelGrid {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Build a grid by asking `f(col, row)` for every pixel.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut rows = [0u64; HEIGHT];
        for (row, word) in rows.iter_mut().enumerate() {
            for col in 0..WIDTH {
                if f(col, row) {
                    *word |= 1u64 << col;
                }
            }
        }
        Self { rows }
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> bool {
        debug_assert!(col < WIDTH && row < HEIGHT);
        (self.rows[row] >> col) & 1 == 1
    }

    /// Mirror top <-> bottom.
    pub fn flip_vertical(&self) -> Self {
        let mut rows = self.rows;
        rows.reverse();
        Self { rows }
    }

    /// Mirror left <-> right.
    pub fn flip_horizontal(&self) -> Self {
        let mut rows = self.rows;
        for word in rows.iter_mut() {
            *word = word.reverse_bits();
        }
        Self { rows }
    }

    pub fn count_on(&self) -> u32 {
        self.rows.iter().map(|w| w.count_ones()).sum()
    }
}

/// One text line per row, `#` for on and `.` for off.
impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                f.write_str(if self.get(col, row) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelGrid(on={})\n{}", self.count_on(), self)
    }
}
