use super::transfer::{linear_rgb_to_oklab, linear_to_srgb, oklab_to_linear_rgb, srgb_to_linear};
use super::{ColorError, LinearRgb, OkLab};

/// Parses a 6-digit sRGB hex color into Oklab.
///
/// Accepts `rrggbb` with an optional leading `#`, case-insensitive. Alpha and
/// the 3-digit shorthand are rejected.
pub fn hex_to_color(hex: &str) -> Result<OkLab, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }

    let channel = |i: usize| -> Result<f64, ColorError> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f64 / 255.0)
            .map_err(|_| ColorError::InvalidFormat(hex.to_string()))
    };

    let rgb = LinearRgb::new(
        srgb_to_linear(channel(0)?),
        srgb_to_linear(channel(2)?),
        srgb_to_linear(channel(4)?),
    );
    Ok(linear_rgb_to_oklab(rgb))
}

/// Encodes an Oklab color as lowercase `#rrggbb`.
///
/// Out-of-gamut colors are clamped twice:
/// 1. linear RGB to `[0, 1]` before the sRGB transfer function (the transfer is
///    undefined for negatives and overshoots above 1);
/// 2. the rounded 8-bit value to `[0, 255]`.
///
/// Dropping either stage changes the output for out-of-gamut inputs.
pub fn color_to_hex(color: OkLab) -> String {
    let rgb = oklab_to_linear_rgb(color).clamped();
    let [r, g, b] = [rgb.r, rgb.g, rgb.b].map(encode_channel);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Linear channel (already clamped) to an 8-bit sRGB value.
#[inline]
pub(crate) fn encode_channel(linear: f64) -> u8 {
    let v = (linear_to_srgb(linear) * 255.0).round();
    // NaN falls through `clamp` unchanged and casts to 0.
    v.clamp(0.0, 255.0) as u8
}
