// Buffer set - Fallback frame sources for the video port
//
// Owns the two frames the port can substitute when the chipset core is
// not producing pictures: a solid black blank frame and a white-noise
// frame backed by a window into the noise store. The live frames are
// owned by the chipset core, not by this set.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use rand::Rng;

use super::framebuffer::{FrameBuffer, FrameRef, BLACK};
use super::noise::NoiseStore;

/// Self-owned fallback frame sources (noise and blank)
///
/// The noise frame's scalar state lives in atomics so that
/// [`refresh_noise`](Self::refresh_noise) can run through `&self` from
/// the render thread. The frames handed out are [`FrameRef`] views that
/// borrow this set, so no view can outlive the storage it aliases.
pub struct BufferSet {
    /// Random pixel pool the noise frame windows into
    noise_store: NoiseStore,

    /// Solid black frame, filled once and never mutated afterward
    blank: FrameBuffer,

    /// Current anchor of the noise window within the store
    noise_offset: AtomicUsize,

    /// Frame id of the noise frame, bumped on every refresh
    noise_frame_id: AtomicU64,

    /// Field parity of the noise frame
    noise_long_frame: AtomicBool,

    /// Parity of the previous noise frame
    noise_prev_long_frame: AtomicBool,
}

impl BufferSet {
    /// Allocate the noise store and the blank frame
    pub fn new() -> Self {
        let mut blank = FrameBuffer::new();
        blank.fill(BLACK);

        Self {
            noise_store: NoiseStore::new(),
            blank,
            noise_offset: AtomicUsize::new(0),
            noise_frame_id: AtomicU64::new(0),
            noise_long_frame: AtomicBool::new(false),
            noise_prev_long_frame: AtomicBool::new(false),
        }
    }

    /// Re-anchor the noise window and advance the noise frame
    ///
    /// Called once per consumer request while noise mode is active;
    /// the moving window is what produces rolling static instead of a
    /// frozen pattern. The new offset always leaves the window within
    /// the store.
    pub fn refresh_noise(&self) {
        let offset = rand::thread_rng().gen_range(0..=self.noise_store.max_offset());
        self.noise_offset.store(offset, Ordering::Relaxed);
        self.noise_frame_id.fetch_add(1, Ordering::Relaxed);

        let was_long = self.noise_long_frame.fetch_xor(true, Ordering::Relaxed);
        self.noise_prev_long_frame.store(was_long, Ordering::Relaxed);
    }

    /// View of the noise frame at its current anchor
    pub fn noise_frame(&self) -> FrameRef<'_> {
        FrameRef {
            pixels: self.noise_store.window(self.noise_offset.load(Ordering::Relaxed)),
            frame_id: self.noise_frame_id.load(Ordering::Relaxed),
            long_frame: self.noise_long_frame.load(Ordering::Relaxed),
            prev_long_frame: self.noise_prev_long_frame.load(Ordering::Relaxed),
        }
    }

    /// View of the blank frame
    pub fn blank_frame(&self) -> FrameRef<'_> {
        FrameRef::from(&self.blank)
    }
}

impl Default for BufferSet {
    fn default() -> Self {
        Self::new()
    }
}
