//! Packed gradient uniform shared with `shaders/gradient.wgsl`.
//!
//! Layout (little-endian, 144 bytes):
//!
//! | offset | field              | type            |
//! |--------|--------------------|-----------------|
//! | 0      | `angle_rad`        | `f32`           |
//! | 4      | `num_stops`        | `u32`           |
//! | 8      | `_pad`             | `[u32; 2]`      |
//! | 16     | `stops[0..8]`      | `StopRecord` ×8 |
//!
//! `StopRecord` is `(position, r, g, b)` as four `f32`, 16 bytes each. Any edit
//! here must be mirrored in the WGSL `GradientUniform` struct; the tests parse
//! the shader and compare offsets.

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::color::oklab_to_linear_rgb;
use crate::paint::{clamp_unit, Gradient};

/// Maximum number of stops the shader reads.
pub const MAX_STOPS: usize = 8;

/// One packed stop: clamped position and linear-light RGB.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct StopRecord {
    pub position: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl StopRecord {
    #[inline]
    pub fn rgb(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Uniform block consumed by the gradient shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct GradientUniform {
    pub angle_rad: f32,
    pub num_stops: u32,
    pub _pad: [u32; 2], // 16-byte alignment for `stops`
    pub stops: [StopRecord; MAX_STOPS],
}

const _: () = {
    assert!(cfg!(target_endian = "little"), "GradientUniform is uploaded as native bytes");
    assert!(size_of::<StopRecord>() == 16);
    assert!(offset_of!(GradientUniform, angle_rad) == 0);
    assert!(offset_of!(GradientUniform, num_stops) == 4);
    assert!(offset_of!(GradientUniform, _pad) == 8);
    assert!(offset_of!(GradientUniform, stops) == 16);
    assert!(size_of::<GradientUniform>() == 16 + 16 * MAX_STOPS);
};

impl GradientUniform {
    /// Packs a gradient.
    ///
    /// Stops are sorted by position (stable) and truncated to [`MAX_STOPS`]; the
    /// highest-position extras are dropped. Positions are clamped to [0, 1] and
    /// colors converted to clamped linear RGB. Unused slots stay zeroed.
    pub fn pack(gradient: &Gradient) -> Self {
        let mut uniform = Self {
            angle_rad: gradient.angle.to_radians() as f32,
            ..Self::zeroed()
        };

        for (slot, stop) in uniform
            .stops
            .iter_mut()
            .zip(gradient.sorted_stops().into_iter().take(MAX_STOPS))
        {
            let [r, g, b] = oklab_to_linear_rgb(stop.color).clamped().to_f32();
            *slot = StopRecord {
                position: clamp_unit(stop.position) as f32,
                r,
                g,
                b,
            };
            uniform.num_stops += 1;
        }

        uniform
    }

    /// Active stop records.
    #[inline]
    pub fn active_stops(&self) -> &[StopRecord] {
        &self.stops[..(self.num_stops as usize).min(MAX_STOPS)]
    }

    /// Raw bytes for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Minimum binding size for the gradient uniform buffer.
pub(super) fn uniform_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(size_of::<GradientUniform>() as u64)
        .expect("GradientUniform has non-zero size by construction")
}
