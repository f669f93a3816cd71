// Frame buffer - Full-raster pixel storage with per-field metadata
//
// One buffer covers the entire raster including the blanking margins.
// The pixel storage length never changes for the lifetime of a buffer;
// only the contents and the frame id / field parity mutate.

use super::constants::{HPIXELS, PIXELS, VPIXELS};

/// Opaque black (ABGR)
pub const BLACK: u32 = 0xFF00_0000;

/// Opaque white (ABGR)
pub const WHITE: u32 = 0xFFFF_FFFF;

/// A completed or in-progress picture frame
///
/// The live frames are owned by the chipset core; the video port owns
/// only its blank fallback. Consumers never receive a `FrameBuffer`
/// directly, they receive a [`FrameRef`] view.
pub struct FrameBuffer {
    /// Pixel data, row-major, `HPIXELS` per line
    pixels: Box<[u32]>,

    /// Identifier of the emulated field that produced this content
    frame_id: u64,

    /// Field parity flag for interlaced output
    long_frame: bool,

    /// Parity of the previous field, for detecting parity transitions
    prev_long_frame: bool,
}

impl FrameBuffer {
    /// Create a new frame buffer initialized to opaque black
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; PIXELS].into_boxed_slice(),
            frame_id: 0,
            long_frame: false,
            prev_long_frame: false,
        }
    }

    /// Set a pixel at the given raster coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        assert!(x < HPIXELS, "X coordinate {} out of bounds", x);
        assert!(y < VPIXELS, "Y coordinate {} out of bounds", y);

        self.pixels[y * HPIXELS + x] = color;
    }

    /// Get a pixel at the given raster coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        assert!(x < HPIXELS, "X coordinate {} out of bounds", x);
        assert!(y < VPIXELS, "Y coordinate {} out of bounds", y);

        self.pixels[y * HPIXELS + x]
    }

    /// Fill the entire raster with one color
    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Raw pixel data, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access to the raw pixel data
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Identifier of the field that produced this content
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    pub fn set_frame_id(&mut self, id: u64) {
        self.frame_id = id;
    }

    /// Field parity of this frame
    pub fn long_frame(&self) -> bool {
        self.long_frame
    }

    /// Field parity of the previous frame
    pub fn prev_long_frame(&self) -> bool {
        self.prev_long_frame
    }

    /// Flip the field parity, retiring the old value
    pub fn toggle_long_frame(&mut self) {
        self.prev_long_frame = self.long_frame;
        self.long_frame = !self.long_frame;
    }

    /// Advance to the next field: bump the frame id and flip parity
    pub fn advance(&mut self) {
        self.frame_id += 1;
        self.toggle_long_frame();
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning view of a completed frame
///
/// Borrows the pixel storage of whichever source produced the frame, so
/// a view can never outlive that storage. The metadata is copied out at
/// the time the view is taken.
#[derive(Clone, Copy)]
pub struct FrameRef<'a> {
    /// Pixel data, row-major, `HPIXELS` per line
    pub pixels: &'a [u32],

    /// Identifier of the field that produced this content
    pub frame_id: u64,

    /// Field parity of this frame
    pub long_frame: bool,

    /// Field parity of the previous frame
    pub prev_long_frame: bool,
}

impl<'a> From<&'a FrameBuffer> for FrameRef<'a> {
    fn from(buffer: &'a FrameBuffer) -> Self {
        Self {
            pixels: &buffer.pixels,
            frame_id: buffer.frame_id,
            long_frame: buffer.long_frame,
            prev_long_frame: buffer.prev_long_frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.pixels().len(), PIXELS);
        assert_eq!(fb.frame_id(), 0);
        assert!(!fb.long_frame());
    }

    #[test]
    fn test_new_buffer_is_black() {
        let fb = FrameBuffer::new();
        assert!(fb.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(100, 100, WHITE);
        assert_eq!(fb.get_pixel(100, 100), WHITE);
        assert_eq!(fb.get_pixel(101, 100), BLACK);
    }

    #[test]
    fn test_fill() {
        let mut fb = FrameBuffer::new();
        fb.fill(0xFF12_3456);
        assert_eq!(fb.get_pixel(0, 0), 0xFF12_3456);
        assert_eq!(fb.get_pixel(HPIXELS - 1, VPIXELS - 1), 0xFF12_3456);
    }

    #[test]
    fn test_advance_tracks_parity() {
        let mut fb = FrameBuffer::new();
        fb.advance();
        assert_eq!(fb.frame_id(), 1);
        assert!(fb.long_frame());
        assert!(!fb.prev_long_frame());

        fb.advance();
        assert_eq!(fb.frame_id(), 2);
        assert!(!fb.long_frame());
        assert!(fb.prev_long_frame());
    }

    #[test]
    fn test_frame_ref_copies_metadata() {
        let mut fb = FrameBuffer::new();
        fb.set_frame_id(42);
        fb.toggle_long_frame();

        let frame = FrameRef::from(&fb);
        assert_eq!(frame.frame_id, 42);
        assert!(frame.long_frame);
        assert_eq!(frame.pixels.len(), PIXELS);
    }

    #[test]
    #[should_panic]
    fn test_set_pixel_out_of_bounds_x() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(HPIXELS, 0, BLACK);
    }

    #[test]
    #[should_panic]
    fn test_set_pixel_out_of_bounds_y() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, VPIXELS, BLACK);
    }
}
