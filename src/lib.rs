// Video Port Emulation Library
// Core library for the video output stage of a classic home-computer
// chipset: buffer selection, frame hand-off, loss accounting, and
// active picture area detection.

pub mod video;

// Re-export main types for convenience
pub use video::{
    shrink_to_content, ActiveArea, BufferSet, FrameBuffer, FrameRef, NoiseStore, NormalizedArea,
    PixelSource, VideoOption, VideoPort, VideoPortConfig, VideoPortError, VideoPortInfo,
    VideoPortStats, VideoStandard, BLACK, HBLANK_CNT, HPIXELS, PIXELS, VPIXELS, WHITE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // Test that all components can be instantiated
        let _port = VideoPort::new();
        let _buffers = BufferSet::new();
        let _frame = FrameBuffer::new();
        let _noise = NoiseStore::new();
    }
}
