//! Shared test helpers
//!
//! Provides a minimal chipset core stand-in that owns a two-slot
//! stable-buffer history, the way the real core's double buffering
//! exposes completed fields to readers.

#![allow(dead_code)]

use vidport::{FrameBuffer, PixelSource, VideoStandard};

/// Fake chipset core with a two-slot stable history
///
/// `buffers[0]` is the most recently completed field. Producing a new
/// field recycles the oldest slot, which is exactly the moment the
/// real core would announce a buffer swap.
pub struct TestChipset {
    buffers: Vec<FrameBuffer>,
    next_frame_id: u64,
    pub powered: bool,
    pub standard: VideoStandard,
}

impl TestChipset {
    pub fn new(standard: VideoStandard) -> Self {
        Self {
            buffers: vec![FrameBuffer::new(), FrameBuffer::new()],
            next_frame_id: 1,
            powered: true,
            standard,
        }
    }

    /// Complete a field filled with one color
    ///
    /// The oldest slot becomes the new stable buffer. Callers that
    /// track frame loss must invoke `VideoPort::on_buffer_swap` before
    /// this, as the real producer does.
    pub fn finish_frame(&mut self, color: u32) {
        let id = self.next_frame_id;
        self.next_frame_id += 1;

        self.buffers.rotate_right(1);
        let front = &mut self.buffers[0];
        front.fill(color);
        front.set_frame_id(id);
        front.toggle_long_frame();
    }

    /// Mutable access to the current stable buffer, for painting
    /// fixtures
    pub fn stable_buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffers[0]
    }
}

impl PixelSource for TestChipset {
    fn stable_buffer(&self, offset: usize) -> &FrameBuffer {
        &self.buffers[offset]
    }

    fn is_powered_on(&self) -> bool {
        self.powered
    }

    fn video_standard(&self) -> VideoStandard {
        self.standard
    }
}
