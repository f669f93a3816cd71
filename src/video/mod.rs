// Video module - Frame hand-off between the chipset core and the host
//
// This module provides:
// - Full-raster frame buffer with per-field metadata
// - White-noise and blank fallback frames
// - Buffer selection against power state and configuration
// - Frame-loss telemetry
// - Active picture area detection for host-side auto-cropping

pub mod area;
pub mod buffers;
pub mod constants;
pub mod framebuffer;
pub mod noise;
pub mod port;
pub mod source;

pub use area::{shrink_to_content, ActiveArea, NormalizedArea};
pub use buffers::BufferSet;
pub use constants::{VideoStandard, HBLANK_CNT, HPIXELS, PIXELS, VPIXELS};
pub use framebuffer::{FrameBuffer, FrameRef, BLACK, WHITE};
pub use noise::{NoiseStore, NOISE_PIXELS};
pub use port::{
    VideoOption, VideoPort, VideoPortConfig, VideoPortError, VideoPortInfo, VideoPortStats,
};
pub use source::PixelSource;
