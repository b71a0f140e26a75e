/// Linear-light sRGB color.
///
/// Values are expected in linear space. Channels may fall outside `[0, 1]` for
/// colors that are out of the sRGB gamut; call [`clamped`](Self::clamped) before
/// encoding or weighting.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    #[inline]
    pub fn in_gamut(self) -> bool {
        (0.0..=1.0).contains(&self.r) && (0.0..=1.0).contains(&self.g) && (0.0..=1.0).contains(&self.b)
    }

    /// Clamps every channel to `[0, 1]`. NaN and `-0.0` become `0.0`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: clamp_channel(self.r),
            g: clamp_channel(self.g),
            b: clamp_channel(self.b),
        }
    }

    /// Channels narrowed to `f32` for GPU upload.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

#[inline]
fn clamp_channel(c: f64) -> f64 {
    if c.is_nan() || c <= 0.0 {
        0.0
    } else if c >= 1.0 {
        1.0
    } else {
        c
    }
}
