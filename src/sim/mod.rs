//! Deterministic simulation module
//!
//! All bounce logic lives here. This module must be pure and deterministic:
//! - One velocity step per tick, no wall-clock time
//! - Randomness only through the injected tint source
//! - Stable iteration order (by sprite id)
//! - No rendering or platform dependencies

pub mod scene;
pub mod tick;
pub mod tint;

pub use scene::{Scene, Sprite};
pub use tick::step;
pub use tint::{HueWheel, TintSource, hue_to_rgb};
