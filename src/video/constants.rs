// Video timing constants
//
// The frame buffer covers the full raster including the horizontal and
// vertical blanking margins, so the visible picture is a sub-rectangle
// of the buffer. Horizontal quantities are expressed in DMA time slots
// (4 pixels each); vertical quantities in raster lines.

use serde::{Deserialize, Serialize};

/// DMA time slots per scanline
pub const HPOS_CNT: usize = 227;

/// Highest horizontal slot position
pub const HPOS_MAX: usize = HPOS_CNT - 1;

/// Horizontal blanking width in DMA time slots
pub const HBLANK_CNT: usize = 18;

/// Pixels per scanline (4 pixels per DMA slot)
pub const HPIXELS: usize = 4 * HPOS_CNT;

/// Lines in the frame buffer (sized for a PAL long frame)
pub const VPIXELS: usize = 313;

/// Total number of pixels in one frame buffer
pub const PIXELS: usize = HPIXELS * VPIXELS;

// ========================================
// Vertical timing (PAL)
// ========================================

/// Vertical blanking lines (PAL)
pub const PAL_VBLANK_CNT: usize = 26;

/// Lines per long frame (PAL)
pub const PAL_VPOS_CNT: usize = 313;

/// Lines per short frame (PAL)
pub const PAL_VPOS_CNT_SF: usize = 312;

// ========================================
// Vertical timing (NTSC)
// ========================================

/// Vertical blanking lines (NTSC)
pub const NTSC_VBLANK_CNT: usize = 21;

/// Lines per long frame (NTSC)
pub const NTSC_VPOS_CNT: usize = 263;

/// Lines per short frame (NTSC)
pub const NTSC_VPOS_CNT_SF: usize = 262;

/// Video standard the emulated machine is configured for
///
/// Selects the vertical timing constants used when seeding the active
/// area search box. The standard is an external input, not detected
/// from the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoStandard {
    Pal,
    Ntsc,
}

impl VideoStandard {
    /// Number of vertical blanking lines at the top of the raster
    pub fn vblank_lines(self) -> usize {
        match self {
            VideoStandard::Pal => PAL_VBLANK_CNT,
            VideoStandard::Ntsc => NTSC_VBLANK_CNT,
        }
    }

    /// Lines per short frame (even field)
    pub fn short_frame_lines(self) -> usize {
        match self {
            VideoStandard::Pal => PAL_VPOS_CNT_SF,
            VideoStandard::Ntsc => NTSC_VPOS_CNT_SF,
        }
    }

    /// Lines per long frame (odd field)
    pub fn long_frame_lines(self) -> usize {
        match self {
            VideoStandard::Pal => PAL_VPOS_CNT,
            VideoStandard::Ntsc => NTSC_VPOS_CNT,
        }
    }

    /// Field rate in Hz
    pub fn field_rate(self) -> f64 {
        match self {
            VideoStandard::Pal => 50.0,
            VideoStandard::Ntsc => 60.0,
        }
    }
}
