use std::str::FromStr;

use super::ColorError;

/// Oklab color (opponent form).
///
/// `l` is nominally in `[0, 1]` but conversions of out-of-gamut inputs may land
/// slightly outside. `a` and `b` are unbounded chroma axes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Oklch color (polar form of [`OkLab`]).
///
/// Invariants:
/// - `c >= 0`
/// - `h` is in degrees, normalized to `[0, 360)`
/// - `h == 0` whenever `c == 0`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl OkLab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }

    /// Parses a `#rrggbb` / `rrggbb` string. See [`hex_to_color`](super::hex_to_color).
    #[inline]
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        super::hex_to_color(hex)
    }

    /// Encodes as lowercase `#rrggbb`. See [`color_to_hex`](super::color_to_hex).
    #[inline]
    pub fn to_hex(self) -> String {
        super::color_to_hex(self)
    }

    #[inline]
    pub fn to_polar(self) -> OkLch {
        to_polar(self)
    }
}

impl FromStr for OkLab {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::hex_to_color(s)
    }
}

impl OkLch {
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[inline]
    pub fn to_opponent(self) -> OkLab {
        to_opponent(self)
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Converts opponent form to polar form.
///
/// Hue is undefined for achromatic colors; it is pinned to `0` when `c == 0`.
pub fn to_polar(c: OkLab) -> OkLch {
    let chroma = (c.a * c.a + c.b * c.b).sqrt();
    let h = if chroma == 0.0 {
        0.0
    } else {
        let deg = c.b.atan2(c.a).to_degrees();
        normalize_hue(if deg < 0.0 { deg + 360.0 } else { deg })
    };
    OkLch { l: c.l, c: chroma, h }
}

/// Converts polar form back to opponent form.
pub fn to_opponent(c: OkLch) -> OkLab {
    let h = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h.cos(),
        b: c.c * h.sin(),
    }
}

/// `a·(1 - t) + b·t`, which returns `a` at `t = 0` and `b` at `t = 1` bit-exactly.
#[inline]
fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Componentwise interpolation in Oklab. `t` is clamped to `[0, 1]`.
pub fn lerp_opponent(c1: OkLab, c2: OkLab, t: f64) -> OkLab {
    let t = t.clamp(0.0, 1.0);
    OkLab {
        l: mix(c1.l, c2.l, t),
        a: mix(c1.a, c2.a, t),
        b: mix(c1.b, c2.b, t),
    }
}

/// Interpolation in Oklch. Lightness and chroma are linear; hue travels along
/// the shorter arc. `t` is clamped to `[0, 1]`.
pub fn lerp_polar(c1: OkLch, c2: OkLch, t: f64) -> OkLch {
    let t = t.clamp(0.0, 1.0);

    let mut delta = (c2.h - c1.h) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }

    OkLch {
        l: mix(c1.l, c2.l, t),
        c: mix(c1.c, c2.c, t),
        h: normalize_hue(c1.h + delta * t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9
    }

    // ── polar conversion ──────────────────────────────────────────────────

    #[test]
    fn polar_of_positive_a_axis_is_zero_degrees() {
        let p = to_polar(OkLab::new(0.5, 0.1, 0.0));
        assert!(close(p.c, 0.1));
        assert!(close(p.h, 0.0));
    }

    #[test]
    fn polar_hue_is_normalized_for_negative_b() {
        let p = to_polar(OkLab::new(0.5, 0.0, -0.2));
        assert!(close(p.h, 270.0), "h = {}", p.h);
        assert!((0.0..360.0).contains(&p.h));
    }

    #[test]
    fn polar_zero_chroma_pins_hue() {
        let p = to_polar(OkLab::new(0.3, 0.0, 0.0));
        assert_eq!(p.c, 0.0);
        assert_eq!(p.h, 0.0);

        // atan2(-0, -0) would give -180 degrees.
        let p = to_polar(OkLab::new(0.3, -0.0, -0.0));
        assert_eq!(p.h, 0.0);
    }

    #[test]
    fn polar_round_trip_nonzero_chroma() {
        let samples = [
            OkLab::new(0.5, 0.1, 0.05),
            OkLab::new(0.9, -0.12, 0.03),
            OkLab::new(0.2, -0.05, -0.3),
            OkLab::new(0.7, 0.2, -0.01),
            OkLab::new(0.4, 1e-6, 1e-6),
        ];
        for c in samples {
            let back = to_opponent(to_polar(c));
            assert!(close(back.l, c.l), "{c:?} -> {back:?}");
            assert!(close(back.a, c.a), "{c:?} -> {back:?}");
            assert!(close(back.b, c.b), "{c:?} -> {back:?}");
        }
    }

    // ── lerp_opponent ─────────────────────────────────────────────────────

    #[test]
    fn lerp_opponent_endpoints_are_exact() {
        let c1 = OkLab::new(0.123456789, -0.0987654321, 0.3141592653);
        let c2 = OkLab::new(0.987654321, 0.2718281828, -0.1414213562);
        assert_eq!(lerp_opponent(c1, c2, 0.0), c1);
        assert_eq!(lerp_opponent(c1, c2, 1.0), c2);
    }

    #[test]
    fn lerp_opponent_clamps_t() {
        let c1 = OkLab::black();
        let c2 = OkLab::white();
        assert_eq!(lerp_opponent(c1, c2, -1.0), c1);
        assert_eq!(lerp_opponent(c1, c2, 2.5), c2);
    }

    #[test]
    fn lerp_opponent_midpoint() {
        let m = lerp_opponent(OkLab::new(0.0, -0.2, 0.1), OkLab::new(1.0, 0.2, 0.3), 0.5);
        assert!(close(m.l, 0.5));
        assert!(close(m.a, 0.0));
        assert!(close(m.b, 0.2));
    }

    // ── lerp_polar ────────────────────────────────────────────────────────

    #[test]
    fn lerp_polar_takes_shorter_arc_across_zero() {
        let a = OkLch::new(0.5, 0.1, 350.0);
        let b = OkLch::new(0.5, 0.1, 10.0);
        let m = lerp_polar(a, b, 0.5);
        assert!(close(m.h, 0.0) || close(m.h, 360.0), "h = {}", m.h);

        let q = lerp_polar(a, b, 0.25);
        assert!(close(q.h, 355.0), "h = {}", q.h);
    }

    #[test]
    fn lerp_polar_takes_shorter_arc_backwards() {
        let m = lerp_polar(OkLch::new(0.5, 0.1, 10.0), OkLch::new(0.5, 0.1, 350.0), 0.75);
        assert!(close(m.h, 355.0), "h = {}", m.h);
    }

    #[test]
    fn lerp_polar_half_turn_goes_positive() {
        // A delta of exactly 180 stays at +180 (interval is (-180, 180]).
        let m = lerp_polar(OkLch::new(0.5, 0.1, 0.0), OkLch::new(0.5, 0.1, 180.0), 0.5);
        assert!(close(m.h, 90.0), "h = {}", m.h);
        let m = lerp_polar(OkLch::new(0.5, 0.1, 180.0), OkLch::new(0.5, 0.1, 0.0), 0.5);
        assert!(close(m.h, 270.0), "h = {}", m.h);
    }

    #[test]
    fn lerp_polar_interpolates_lightness_and_chroma() {
        let m = lerp_polar(OkLch::new(0.2, 0.0, 30.0), OkLch::new(0.6, 0.2, 90.0), 0.5);
        assert!(close(m.l, 0.4));
        assert!(close(m.c, 0.1));
        assert!(close(m.h, 60.0));
    }

    #[test]
    fn lerp_polar_clamps_t() {
        let a = OkLch::new(0.2, 0.05, 40.0);
        let b = OkLch::new(0.8, 0.15, 120.0);
        assert_eq!(lerp_polar(a, b, -3.0).h, 40.0);
        assert!(close(lerp_polar(a, b, 9.0).h, 120.0));
    }
}
