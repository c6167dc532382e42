//! WebGPU rendering module
//!
//! Draws one tinted, alpha-blended logo quad per sprite.

pub mod logo;
pub mod pipeline;
pub mod vertex;

pub use pipeline::RenderState;
