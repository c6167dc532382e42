//! Random tint generation
//!
//! Wall hits recolor the sprite. The hue source is a capability handed into
//! the tick step so tests can substitute a scripted sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::HUE_BUCKETS;

/// Source of wall-hit tints
pub trait TintSource {
    /// Draw the next RGBA tint
    fn next_tint(&mut self) -> [f32; 4];
}

/// Seeded hue generator.
///
/// Each draw picks one of [`HUE_BUCKETS`] discrete hues at full saturation
/// and value. Deterministic for a fixed seed.
#[derive(Debug, Clone)]
pub struct HueWheel {
    rng: Pcg32,
}

impl HueWheel {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl TintSource for HueWheel {
    fn next_tint(&mut self) -> [f32; 4] {
        let bucket = self.rng.random_range(0..HUE_BUCKETS);
        hue_to_rgb(bucket as f32 / HUE_BUCKETS as f32)
    }
}

/// Convert a hue in [0,1) at full saturation and value to opaque RGBA
pub fn hue_to_rgb(hue: f32) -> [f32; 4] {
    let h = hue.rem_euclid(1.0) * 6.0;
    let f = h.fract();
    let (r, g, b) = match h as u32 {
        0 => (1.0, f, 0.0),
        1 => (1.0 - f, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, 1.0 - f, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - f),
    };
    [r, g, b, 1.0]
}
