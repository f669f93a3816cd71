// Noise store - Backing storage for the white-noise fallback frame
//
// Filled once at construction with random black/white pixels and never
// mutated afterward. The noise frame does not copy from the store; it
// borrows a raster-sized window at a varying offset, which is what
// turns a fixed pattern into rolling analog "snow".

use rand::Rng;

use super::constants::PIXELS;
use super::framebuffer::{BLACK, WHITE};

/// Entries in the noise store (two full rasters, so every window
/// starting below `PIXELS` stays in bounds)
pub const NOISE_PIXELS: usize = 2 * PIXELS;

/// Immutable pool of random black/white pixels
pub struct NoiseStore {
    data: Box<[u32]>,
}

impl NoiseStore {
    /// Allocate and fill the store with independent coin flips
    ///
    /// The randomness is a visual artifact only; reproducibility across
    /// runs is not required.
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let data = (0..NOISE_PIXELS)
            .map(|_| if rng.gen_bool(0.5) { BLACK } else { WHITE })
            .collect();

        Self { data }
    }

    /// Number of entries in the store
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Largest offset at which a raster-sized window still fits
    pub fn max_offset(&self) -> usize {
        self.data.len() - PIXELS
    }

    /// Raster-sized window into the store
    ///
    /// # Panics
    /// Panics if the window would run past the end of the store
    pub fn window(&self, offset: usize) -> &[u32] {
        assert!(
            offset <= self.max_offset(),
            "Noise window at offset {} exceeds store length {}",
            offset,
            self.data.len()
        );

        &self.data[offset..offset + PIXELS]
    }
}

impl Default for NoiseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_size() {
        let store = NoiseStore::new();
        assert_eq!(store.len(), 2 * PIXELS);
        assert_eq!(store.max_offset(), PIXELS);
    }

    #[test]
    fn test_store_is_binary() {
        let store = NoiseStore::new();
        assert!(store
            .window(0)
            .iter()
            .all(|&p| p == BLACK || p == WHITE));
    }

    #[test]
    fn test_window_bounds() {
        let store = NoiseStore::new();
        assert_eq!(store.window(0).len(), PIXELS);
        assert_eq!(store.window(store.max_offset()).len(), PIXELS);
    }

    #[test]
    #[should_panic(expected = "exceeds store length")]
    fn test_window_past_end() {
        let store = NoiseStore::new();
        store.window(store.max_offset() + 1);
    }
}
