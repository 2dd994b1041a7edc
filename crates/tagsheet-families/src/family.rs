//! Family metadata and packed tag codes.

use serde::{Deserialize, Serialize};

/// How a set bit in a packed code is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// `1` bits are printed black (ArUco convention).
    BlackIsOne,
    /// `1` bits are printed white (AprilTag convention).
    WhiteIsOne,
}

/// A fixed, named tag family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Family {
    /// Family name used on the command line and in reports.
    pub name: &'static str,
    /// Number of data bits per side.
    pub bits_per_side: usize,
    /// Width of the solid black frame around the data bits, in cells.
    pub border_bits: usize,
    /// Minimum Hamming distance between any two codes (for documentation).
    pub min_hamming: u8,
    /// Meaning of a set bit.
    pub polarity: Polarity,
    /// One `u64` per tag, encoding the `bits_per_side × bits_per_side` data
    /// bits row-major: bit `y * bits_per_side + x`.
    pub codes: &'static [u64],
}

impl Family {
    /// Number of codes in the family.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Packed code for the given index.
    #[inline]
    pub fn code(&self, index: usize) -> Option<u64> {
        self.codes.get(index).copied()
    }

    /// Total number of data bits per tag.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits_per_side * self.bits_per_side
    }

    /// Side length of the printed grid in cells, frame included.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.bits_per_side + 2 * self.border_bits
    }

    /// Raw data bit at `(x, y)` of the data area.
    #[inline]
    pub fn data_bit(&self, code: u64, x: usize, y: usize) -> bool {
        debug_assert!(x < self.bits_per_side && y < self.bits_per_side);
        (code >> (y * self.bits_per_side + x)) & 1 == 1
    }

    /// Whether cell `(gx, gy)` of the printed grid is black.
    ///
    /// Cells in the frame are always black; cells outside the grid are white.
    pub fn is_black(&self, code: u64, gx: usize, gy: usize) -> bool {
        let grid = self.grid_size();
        if gx >= grid || gy >= grid {
            return false;
        }
        let b = self.border_bits;
        let inside = (b..b + self.bits_per_side).contains(&gx)
            && (b..b + self.bits_per_side).contains(&gy);
        if !inside {
            return true;
        }
        let bit = self.data_bit(code, gx - b, gy - b);
        match self.polarity {
            Polarity::BlackIsOne => bit,
            Polarity::WhiteIsOne => !bit,
        }
    }
}
