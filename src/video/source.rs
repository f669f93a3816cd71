// Pixel source - Interface to the external chipset core
//
// The chipset core owns the double-buffering discipline: it keeps a
// small history of completed "stable" buffers that are safe for
// concurrent reads while it paints the next field elsewhere.

use super::constants::VideoStandard;
use super::framebuffer::FrameBuffer;

/// Access to the chipset core's completed picture buffers
pub trait PixelSource {
    /// A recently completed picture buffer
    ///
    /// `offset` indexes the retained history; 0 is the most recent.
    /// Passing an offset the core no longer retains is the caller's
    /// contract violation, not validated here.
    fn stable_buffer(&self, offset: usize) -> &FrameBuffer;

    /// Whether the emulated machine is currently producing pictures
    fn is_powered_on(&self) -> bool;

    /// Video standard the machine is configured for
    fn video_standard(&self) -> VideoStandard;
}
