// Video port - Hand-off between the chipset core and the host renderer
//
// Once per display refresh the host asks for a frame; the port decides
// which source to hand back (live picture, white noise, or blank) based
// on the machine's power state and the noise option. It also records
// when the host fell behind and a completed live frame was never
// retrieved before the core moved on.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::area::{shrink_to_content, ActiveArea, NormalizedArea};
use super::buffers::BufferSet;
use super::constants::{HBLANK_CNT, HPIXELS, HPOS_MAX};
use super::framebuffer::FrameRef;
use super::source::PixelSource;

/// Externally settable video port options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoOption {
    /// Whether the white-noise fallback is used when the machine is
    /// not producing pictures
    WhiteNoise,
}

/// Errors that can occur when mutating the option surface
#[derive(Debug)]
pub enum VideoPortError {
    /// The value is outside the option's domain; state is unchanged
    InvalidOptionValue { option: VideoOption, value: i64 },
}

impl fmt::Display for VideoPortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoPortError::InvalidOptionValue { option, value } => {
                write!(f, "Invalid value {} for option {:?}", value, option)
            }
        }
    }
}

impl std::error::Error for VideoPortError {}

/// Snapshot of the configuration surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPortConfig {
    /// Substitute white noise for the picture while the machine is off
    pub white_noise: bool,
}

impl Default for VideoPortConfig {
    fn default() -> Self {
        Self { white_noise: true }
    }
}

/// Snapshot of the frame-loss telemetry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VideoPortStats {
    /// Completed live frames the consumer never retrieved
    pub dropped_frames: u64,
}

/// Snapshot of the retrieval bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VideoPortInfo {
    /// Highest live frame id handed to a consumer
    pub latest_grabbed_frame: u64,
}

/// The video output port
///
/// `get_frame` is called from the render thread and `on_buffer_swap`
/// from the emulation thread; every entry point takes `&self` and the
/// shared scalars are atomics, so the two threads never block each
/// other. Pixel-content safety comes from the core's double-buffering
/// discipline, not from any lock here.
pub struct VideoPort {
    /// Fallback frame sources (noise and blank)
    buffers: BufferSet,

    /// The white-noise option, settable while frames are in flight
    white_noise: AtomicBool,

    /// Highest live frame id handed to a consumer
    latest_grabbed_frame: AtomicU64,

    /// Completed live frames the consumer never retrieved
    dropped_frames: AtomicU64,
}

impl VideoPort {
    /// Create a video port with the default configuration
    ///
    /// Allocates the noise store and blank frame; all buffers live for
    /// the port's entire lifetime and are never reallocated.
    pub fn new() -> Self {
        Self::with_config(VideoPortConfig::default())
    }

    /// Create a video port with an explicit configuration
    pub fn with_config(config: VideoPortConfig) -> Self {
        Self {
            buffers: BufferSet::new(),
            white_noise: AtomicBool::new(config.white_noise),
            latest_grabbed_frame: AtomicU64::new(0),
            dropped_frames: AtomicU64::new(0),
        }
    }

    /// Hand a frame to the host renderer
    ///
    /// Powered machine: the core's stable buffer at `offset` (0 = most
    /// recent), recording its frame id as grabbed. Unpowered: the noise
    /// frame (re-anchored per call, so the static rolls) if the option
    /// is on, the blank frame otherwise.
    ///
    /// The returned view is only valid until the core reclaims that
    /// slot for new writing; no copy is made.
    pub fn get_frame<'a, S: PixelSource>(&'a self, core: &'a S, offset: usize) -> FrameRef<'a> {
        if core.is_powered_on() {
            let buffer = core.stable_buffer(offset);
            self.latest_grabbed_frame
                .store(buffer.frame_id(), Ordering::Relaxed);
            return FrameRef::from(buffer);
        }

        if self.white_noise.load(Ordering::Relaxed) {
            self.buffers.refresh_noise();
            return self.buffers.noise_frame();
        }

        self.buffers.blank_frame()
    }

    /// Notification that the core is about to reuse the stable slot
    ///
    /// Must be invoked by the producer exactly once per completed
    /// field, before overwriting the previously stable buffer. If that
    /// buffer was never handed out, it counts as a dropped frame.
    /// Advisory telemetry only; emulation continues regardless.
    pub fn on_buffer_swap<S: PixelSource>(&self, core: &S) {
        let grabbed = self.latest_grabbed_frame.load(Ordering::Relaxed);
        let current = core.stable_buffer(0).frame_id();

        if grabbed < current {
            let dropped = self.dropped_frames.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!(
                "Frame {} dropped (total: {} latest: {})",
                current,
                dropped,
                grabbed
            );
        }
    }

    /// Locate the picture content inside the current stable buffer
    ///
    /// Seeds the search box with the nominal safe area for the core's
    /// video standard and shrinks it against the border color. Only
    /// meaningful while the machine is producing pictures.
    pub fn find_active_area<S: PixelSource>(&self, core: &S) -> ActiveArea {
        let standard = core.video_standard();
        let buffer = core.stable_buffer(0);

        let start = ActiveArea {
            x1: 4 * HBLANK_CNT,
            x2: 4 * HPOS_MAX,
            y1: standard.vblank_lines(),
            y2: standard.short_frame_lines(),
        };

        shrink_to_content(buffer.pixels(), HPIXELS, start)
    }

    /// [`find_active_area`](Self::find_active_area) with the bounds
    /// expressed as fractions of the raster dimensions
    pub fn find_active_area_normalized<S: PixelSource>(&self, core: &S) -> NormalizedArea {
        self.find_active_area(core).normalized()
    }

    /// Read an option value
    pub fn get_option(&self, option: VideoOption) -> i64 {
        match option {
            VideoOption::WhiteNoise => self.white_noise.load(Ordering::Relaxed) as i64,
        }
    }

    /// Validate an option value without applying it
    pub fn check_option(option: VideoOption, value: i64) -> Result<(), VideoPortError> {
        match option {
            VideoOption::WhiteNoise => match value {
                0 | 1 => Ok(()),
                _ => Err(VideoPortError::InvalidOptionValue { option, value }),
            },
        }
    }

    /// Apply an option value
    ///
    /// Rejected values leave the configuration unchanged.
    pub fn set_option(&self, option: VideoOption, value: i64) -> Result<(), VideoPortError> {
        Self::check_option(option, value)?;

        match option {
            VideoOption::WhiteNoise => {
                self.white_noise.store(value != 0, Ordering::Relaxed);
                Ok(())
            }
        }
    }

    /// Snapshot of the configuration surface
    pub fn config(&self) -> VideoPortConfig {
        VideoPortConfig {
            white_noise: self.white_noise.load(Ordering::Relaxed),
        }
    }

    /// Snapshot of the frame-loss telemetry
    pub fn stats(&self) -> VideoPortStats {
        VideoPortStats {
            dropped_frames: self.dropped_frames.load(Ordering::Relaxed),
        }
    }

    /// Snapshot of the retrieval bookkeeping
    pub fn info(&self) -> VideoPortInfo {
        VideoPortInfo {
            latest_grabbed_frame: self.latest_grabbed_frame.load(Ordering::Relaxed),
        }
    }

    /// Cumulative dropped-frame count
    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames.load(Ordering::Relaxed)
    }

    /// Highest live frame id handed to a consumer
    pub fn latest_grabbed_frame(&self) -> u64 {
        self.latest_grabbed_frame.load(Ordering::Relaxed)
    }
}

impl Default for VideoPort {
    fn default() -> Self {
        Self::new()
    }
}

// Pixel storage is elided; a full dump would be megabytes.
impl fmt::Debug for VideoPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoPort")
            .field("config", &self.config())
            .field("stats", &self.stats())
            .field("info", &self.info())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sync<T: Sync>() {}

    #[test]
    fn test_port_is_sync() {
        // Both calling threads hold &VideoPort concurrently
        assert_sync::<VideoPort>();
    }

    #[test]
    fn test_default_config() {
        let port = VideoPort::new();
        assert!(port.config().white_noise);
        assert_eq!(port.get_option(VideoOption::WhiteNoise), 1);
    }

    #[test]
    fn test_set_option() {
        let port = VideoPort::new();
        port.set_option(VideoOption::WhiteNoise, 0).unwrap();
        assert!(!port.config().white_noise);
        port.set_option(VideoOption::WhiteNoise, 1).unwrap();
        assert!(port.config().white_noise);
    }

    #[test]
    fn test_rejected_option_value_leaves_state_unchanged() {
        let port = VideoPort::new();
        let err = port.set_option(VideoOption::WhiteNoise, 2).unwrap_err();
        assert!(matches!(
            err,
            VideoPortError::InvalidOptionValue { value: 2, .. }
        ));
        assert!(port.config().white_noise);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = VideoPortConfig { white_noise: false };
        let text = toml::to_string(&config).expect("Failed to serialize");
        let parsed: VideoPortConfig = toml::from_str(&text).expect("Failed to deserialize");
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_initial_telemetry() {
        let port = VideoPort::new();
        assert_eq!(port.dropped_frames(), 0);
        assert_eq!(port.latest_grabbed_frame(), 0);
        assert_eq!(port.stats(), VideoPortStats::default());
        assert_eq!(port.info(), VideoPortInfo::default());
    }
}
