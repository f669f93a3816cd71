// Active picture area detection
//
// Locates the smallest rectangle containing picture content inside the
// oversized raster, so a host can auto-crop away the blanking and
// overscan margins. Best-effort heuristic: it assumes a single
// contiguous border color around a single content region.

use super::constants::{HPIXELS, VPIXELS};

/// Detected picture bounds, as inclusive pixel indices
///
/// The zero rectangle signals "no detectable picture"; callers should
/// not crop in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveArea {
    /// Leftmost content column
    pub x1: usize,
    /// Rightmost content column
    pub x2: usize,
    /// Topmost content row
    pub y1: usize,
    /// Bottommost content row
    pub y2: usize,
}

impl ActiveArea {
    /// The degenerate "do not crop" result
    pub const ZERO: ActiveArea = ActiveArea {
        x1: 0,
        x2: 0,
        y1: 0,
        y2: 0,
    };

    /// Whether detection found no crop-worthy region
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Bounds as fractions of the full raster, for
    /// resolution-independent consumers
    pub fn normalized(&self) -> NormalizedArea {
        NormalizedArea {
            x1: self.x1 as f64 / HPIXELS as f64,
            x2: self.x2 as f64 / HPIXELS as f64,
            y1: self.y1 as f64 / VPIXELS as f64,
            y2: self.y2 as f64 / VPIXELS as f64,
        }
    }
}

/// Picture bounds as fractions (0.0-1.0) of the raster dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedArea {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Shrink a search box down to the content it surrounds
///
/// The reference border color is sampled at the box's top-left corner.
/// The right and left edges move inward first, scanning columns against
/// the starting vertical bounds; the bottom and top edges follow,
/// scanning rows against the already-shrunk horizontal bounds. Returns
/// [`ActiveArea::ZERO`] if the box collapses (uniform content, or the
/// heuristic failed).
pub fn shrink_to_content(pixels: &[u32], row_stride: usize, start: ActiveArea) -> ActiveArea {
    let ActiveArea {
        mut x1,
        mut x2,
        mut y1,
        mut y2,
    } = start;

    let border = pixels[y1 * row_stride + x1];

    let col_is_border = |col: usize, y1: usize, y2: usize| {
        (y1..y2).all(|y| pixels[y * row_stride + col] == border)
    };
    let row_is_border = |row: usize, x1: usize, x2: usize| {
        (x1..x2).all(|x| pixels[row * row_stride + x] == border)
    };

    while x2 > 0 && col_is_border(x2, y1, y2) {
        x2 -= 1;
    }
    while x1 < x2 && col_is_border(x1, y1, y2) {
        x1 += 1;
    }
    while y2 > 0 && row_is_border(y2, x1, x2) {
        y2 -= 1;
    }
    while y1 < y2 && row_is_border(y1, x1, x2) {
        y1 += 1;
    }

    if x2 <= x1 || y2 <= y1 {
        return ActiveArea::ZERO;
    }

    ActiveArea { x1, x2, y1, y2 }
}
