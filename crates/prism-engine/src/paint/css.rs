use crate::color::color_to_hex;

use super::{clamp_unit, Gradient, GradientKind};

/// CSS value emitted for gradient kinds without a CSS contract.
pub const CSS_FALLBACK: &str = "none";

/// Serializes a gradient as a CSS `linear-gradient(...)` value.
///
/// Format: `linear-gradient(<angle>deg, <hex> <pct>%, ...)` with stops sorted by
/// position, percentages clamped to [0, 100] with two decimals, and the angle
/// printed as given. Non-linear kinds return [`CSS_FALLBACK`].
pub fn to_css_linear(gradient: &Gradient) -> String {
    if gradient.kind != GradientKind::Linear {
        return CSS_FALLBACK.to_string();
    }

    let stops = gradient
        .sorted_stops()
        .into_iter()
        .map(|s| format!("{} {:.2}%", color_to_hex(s.color), clamp_unit(s.position) * 100.0))
        .collect::<Vec<_>>()
        .join(", ");

    format!("linear-gradient({}deg, {})", gradient.angle, stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::OkLab;

    #[test]
    fn sorts_reverse_insertion_order() {
        let g = Gradient::linear("g", 0.0)
            .with_stop("w", 1.0, OkLab::white())
            .with_stop("k", 0.0, OkLab::black());
        assert_eq!(
            to_css_linear(&g),
            "linear-gradient(0deg, #000000 0.00%, #ffffff 100.00%)"
        );
    }

    #[test]
    fn clamps_out_of_range_positions() {
        let g = Gradient::linear("g", 90.0)
            .with_stop("hi", 1.5, OkLab::white())
            .with_stop("lo", -0.5, OkLab::black());
        assert_eq!(
            to_css_linear(&g),
            "linear-gradient(90deg, #000000 0.00%, #ffffff 100.00%)"
        );
    }

    #[test]
    fn nan_position_is_emitted_first_at_zero() {
        let g = Gradient::linear("g", 0.0)
            .with_stop("w", 1.0, OkLab::white())
            .with_stop("nan", f64::NAN, OkLab::black());
        assert_eq!(
            to_css_linear(&g),
            "linear-gradient(0deg, #000000 0.00%, #ffffff 100.00%)"
        );
    }

    #[test]
    fn signed_zero_keeps_insertion_order() {
        let g = Gradient::linear("g", 0.0)
            .with_stop("first", 0.0, OkLab::white())
            .with_stop("second", -0.0, OkLab::black());
        assert_eq!(
            to_css_linear(&g),
            "linear-gradient(0deg, #ffffff 0.00%, #000000 0.00%)"
        );
    }

    #[test]
    fn formats_two_decimals() {
        let g = Gradient::linear("g", 45.0)
            .with_stop("a", 0.125, OkLab::black())
            .with_stop("b", 1.0 / 3.0, OkLab::white());
        assert_eq!(
            to_css_linear(&g),
            "linear-gradient(45deg, #000000 12.50%, #ffffff 33.33%)"
        );
    }

    #[test]
    fn angle_is_emitted_verbatim() {
        let g = Gradient::linear("g", -450.5).with_stop("a", 0.0, OkLab::black());
        assert_eq!(to_css_linear(&g), "linear-gradient(-450.5deg, #000000 0.00%)");
    }

    #[test]
    fn empty_stops_render_stop_less_string() {
        assert_eq!(to_css_linear(&Gradient::linear("g", 180.0)), "linear-gradient(180deg, )");
    }

    #[test]
    fn non_linear_kinds_fall_back() {
        for kind in [GradientKind::Radial, GradientKind::Conic] {
            let g = Gradient::new("g", kind, 0.0, Vec::new()).with_stop("a", 0.5, OkLab::white());
            assert_eq!(to_css_linear(&g), CSS_FALLBACK);
        }
    }
}
