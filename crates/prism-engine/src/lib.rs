//! Prism engine crate.
//!
//! Perceptual (Oklab) color gradients: color math, the gradient model with its
//! CSS/SVG serializers, a contrast audit, and a headless wgpu renderer with a
//! CPU fallback.

pub mod audit;
pub mod color;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
