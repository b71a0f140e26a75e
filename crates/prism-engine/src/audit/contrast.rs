use crate::color::{oklab_to_linear_rgb, OkLab};
use crate::paint::Gradient;

/// WCAG AA threshold for normal text.
pub const DEFAULT_THRESHOLD: f64 = 4.5;

/// Contrast between two adjacent stops (after sorting by position).
#[derive(Debug, Clone, PartialEq)]
pub struct PairContrast {
    pub first: String,
    pub second: String,
    pub ratio: f64,
}

impl PairContrast {
    #[inline]
    pub fn passes(&self, threshold: f64) -> bool {
        self.ratio >= threshold
    }
}

/// Relative luminance (BT.709 weights) of an Oklab color.
///
/// Linear RGB is clamped to [0, 1] per channel before weighting.
pub fn relative_luminance(color: OkLab) -> f64 {
    let rgb = oklab_to_linear_rgb(color).clamped();
    0.2126 * rgb.r + 0.7152 * rgb.g + 0.0722 * rgb.b
}

/// WCAG contrast ratio `(L_hi + 0.05) / (L_lo + 0.05)`. Argument order does not matter.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

/// Contrast ratio of every adjacent stop pair, left to right by position.
///
/// Returns an empty list for gradients with fewer than two stops.
pub fn contrast_pairs(gradient: &Gradient) -> Vec<PairContrast> {
    let stops = gradient.sorted_stops();
    stops
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            PairContrast {
                first: a.id.clone(),
                second: b.id.clone(),
                ratio: contrast_ratio(relative_luminance(a.color), relative_luminance(b.color)),
            }
        })
        .collect()
}

/// Adjacent stop pairs whose contrast ratio falls below `threshold`.
///
/// Each failing pair is reported once as `(earlier_id, later_id)`, in
/// left-to-right order. Overlapping failures are not merged: three consecutive
/// low-contrast stops yield two entries.
pub fn audit(gradient: &Gradient, threshold: f64) -> Vec<(String, String)> {
    contrast_pairs(gradient)
        .into_iter()
        .filter(|p| p.ratio < threshold)
        .map(|p| (p.first, p.second))
        .collect()
}

/// [`audit`] with [`DEFAULT_THRESHOLD`].
pub fn audit_default(gradient: &Gradient) -> Vec<(String, String)> {
    audit(gradient, DEFAULT_THRESHOLD)
}
