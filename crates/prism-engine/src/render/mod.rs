//! GPU gradient rendering.
//!
//! `GradientRenderer` packs a `Gradient` into `GradientUniform`, uploads it and
//! draws one fullscreen triangle with `shaders/gradient.wgsl` into an off-screen
//! target, then reads the pixels back into the `Canvas`.
//!
//! Convention:
//! - target uv space is [0, 1]², top-left origin, +Y down
//! - stop colors travel as linear RGB; the `*Srgb` target encodes on store
//! - `raster` holds the CPU reference of the fragment shader

mod canvas;
mod ctx;
mod error;
mod pipeline;
pub mod raster;
mod renderer;
pub mod uniform;

pub use canvas::{Canvas, SurfaceId};
pub use error::RenderError;
pub use renderer::{FallbackMode, GradientRenderer, RendererConfig};
pub use uniform::{GradientUniform, StopRecord, MAX_STOPS};

/// Texture format of every render target.
pub const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
