//! Color science.
//!
//! Scope:
//! - sRGB hex ⇄ Oklab (opponent form) ⇄ Oklch (polar form)
//! - interpolation in both forms
//! - gamut clamping on the way back to sRGB
//!
//! All functions are pure. Matrices are fixed constants (see `transfer`).

mod error;
mod hex;
mod linear;
mod oklab;
mod transfer;

pub use error::ColorError;
pub use hex::{color_to_hex, hex_to_color};
pub use linear::LinearRgb;
pub use oklab::{lerp_opponent, lerp_polar, to_opponent, to_polar, OkLab, OkLch};
pub use transfer::{linear_to_srgb, srgb_to_linear};

pub(crate) use hex::encode_channel;
pub(crate) use transfer::oklab_to_linear_rgb;
