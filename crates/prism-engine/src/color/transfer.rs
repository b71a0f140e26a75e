//! Fixed conversion matrices and the linear RGB ⇄ Oklab chain.
//!
//! Forward: linear sRGB → XYZ (D65) → LMS cone response → cube root → Oklab.
//! Inverse: Oklab → LMS' → cube → XYZ → linear sRGB.
//!
//! Every consumer that needs linear light from an [`OkLab`] (hex encoding, the
//! contrast audit, uniform packing, the CPU raster) goes through
//! [`oklab_to_linear_rgb`] so the inverse chain exists exactly once.

use super::{LinearRgb, OkLab};

type Mat3 = [[f64; 3]; 3];

const LINEAR_RGB_TO_XYZ: Mat3 = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

const XYZ_TO_LINEAR_RGB: Mat3 = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

const XYZ_TO_LMS: Mat3 = [
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
];

const LMS_TO_XYZ: Mat3 = [
    [1.2270138511, -0.5577999807, 0.2812561490],
    [-0.0405801784, 1.1122568696, -0.0716766787],
    [-0.0763812845, -0.4214819784, 1.5861632204],
];

const LMS_TO_OKLAB: Mat3 = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

const OKLAB_TO_LMS: Mat3 = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

#[inline]
fn mul(m: &Mat3, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// sRGB electro-optical transfer: encoded channel in `[0, 1]` to linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_to_linear`].
#[inline]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub(crate) fn linear_rgb_to_oklab(rgb: LinearRgb) -> OkLab {
    let xyz = mul(&LINEAR_RGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
    let lms = mul(&XYZ_TO_LMS, xyz);
    let lms_ = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];
    let [l, a, b] = mul(&LMS_TO_OKLAB, lms_);
    OkLab { l, a, b }
}

/// Opponent → linear RGB, without clamping.
pub(crate) fn oklab_to_linear_rgb(c: OkLab) -> LinearRgb {
    let lms_ = mul(&OKLAB_TO_LMS, [c.l, c.a, c.b]);
    let lms = [lms_[0].powi(3), lms_[1].powi(3), lms_[2].powi(3)];
    let xyz = mul(&LMS_TO_XYZ, lms);
    let [r, g, b] = mul(&XYZ_TO_LINEAR_RGB, xyz);
    LinearRgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    // ── transfer functions ────────────────────────────────────────────────

    #[test]
    fn srgb_transfer_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!(close(srgb_to_linear(1.0), 1.0, 1e-12));
        assert!(close(linear_to_srgb(1.0), 1.0, 1e-12));
    }

    #[test]
    fn srgb_transfer_mid_gray() {
        // sRGB 0.5 is roughly 21.4% linear light.
        assert!(close(srgb_to_linear(0.5), 0.214, 1e-3));
    }

    #[test]
    fn srgb_transfer_linear_segment() {
        assert!(close(srgb_to_linear(0.04), 0.04 / 12.92, 1e-15));
        assert!(close(linear_to_srgb(0.002), 0.002 * 12.92, 1e-15));
    }

    #[test]
    fn srgb_transfer_inverts() {
        for i in 0..=100 {
            let c = i as f64 / 100.0;
            assert!(close(linear_to_srgb(srgb_to_linear(c)), c, 1e-9), "c = {c}");
        }
    }

    // ── matrix chain ──────────────────────────────────────────────────────

    #[test]
    fn white_maps_to_unit_lightness() {
        let lab = linear_rgb_to_oklab(LinearRgb::white());
        assert!(close(lab.l, 1.0, 1e-3), "l = {}", lab.l);
        assert!(close(lab.a, 0.0, 1e-3), "a = {}", lab.a);
        assert!(close(lab.b, 0.0, 1e-3), "b = {}", lab.b);
    }

    #[test]
    fn black_maps_to_origin() {
        let lab = linear_rgb_to_oklab(LinearRgb::black());
        assert_eq!(lab, OkLab::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn chain_round_trips_primaries() {
        for rgb in [
            LinearRgb::new(1.0, 0.0, 0.0),
            LinearRgb::new(0.0, 1.0, 0.0),
            LinearRgb::new(0.0, 0.0, 1.0),
            LinearRgb::new(0.2, 0.5, 0.8),
        ] {
            let back = oklab_to_linear_rgb(linear_rgb_to_oklab(rgb));
            assert!(close(back.r, rgb.r, 1e-5), "{rgb:?} -> {back:?}");
            assert!(close(back.g, rgb.g, 1e-5), "{rgb:?} -> {back:?}");
            assert!(close(back.b, rgb.b, 1e-5), "{rgb:?} -> {back:?}");
        }
    }

    #[test]
    fn out_of_gamut_lab_leaves_unit_range() {
        // Very saturated Oklab values do not fit in sRGB; the primitive reports them raw.
        let rgb = oklab_to_linear_rgb(OkLab::new(0.7, 0.4, 0.0));
        assert!(!rgb.in_gamut());
        assert!(rgb.clamped().in_gamut());
    }
}
