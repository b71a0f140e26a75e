use crate::color::color_to_hex;

use super::{clamp_unit, Gradient, GradientKind};

/// Gradient vector `(x1, y1) → (x2, y2)` in unit-square coordinates.
///
/// The CSS angle (0° = to top, 90° = to right) is turned into a direction
/// `(sin θ, -cos θ)` and scaled by the CSS gradient-line half length
/// `0.5 · (|sin θ| + |cos θ|)` around the center (0.5, 0.5). Each coordinate is
/// then clamped to [0, 1].
pub fn gradient_vector(angle_deg: f64) -> [f64; 4] {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let half = 0.5 * (sin.abs() + cos.abs());
    let (dx, dy) = (sin * half, -cos * half);
    [0.5 - dx, 0.5 - dy, 0.5 + dx, 0.5 + dy].map(clamp_unit)
}

/// Serializes a linear gradient as an SVG `<linearGradient>` element.
///
/// Vector coordinates are percentages with two decimals; stop offsets are
/// clamped percentages with one decimal. Non-linear kinds produce an empty
/// string.
///
/// Characters of `element_id` outside `[A-Za-z0-9_-]` are written as `-`.
pub fn to_svg_definition(gradient: &Gradient, element_id: &str) -> String {
    if gradient.kind != GradientKind::Linear {
        return String::new();
    }

    let element_id = xml_name(element_id);
    let [x1, y1, x2, y2] = gradient_vector(gradient.angle).map(|v| v * 100.0);
    let mut out = format!(
        "<linearGradient id=\"{element_id}\" x1=\"{x1:.2}%\" y1=\"{y1:.2}%\" x2=\"{x2:.2}%\" y2=\"{y2:.2}%\">\n"
    );
    for stop in gradient.sorted_stops() {
        out.push_str(&format!(
            "  <stop offset=\"{:.1}%\" stop-color=\"{}\"/>\n",
            clamp_unit(stop.position) * 100.0,
            color_to_hex(stop.color)
        ));
    }
    out.push_str("</linearGradient>");
    out
}

/// Serializes a gradient as a standalone SVG document with one rectangle
/// covering `width × height`.
pub fn to_svg_file(gradient: &Gradient, width: u32, height: u32) -> String {
    let element_id = svg_element_id(&gradient.id);
    let definition = to_svg_definition(gradient, &element_id);
    let fill = if definition.is_empty() {
        "none".to_string()
    } else {
        format!("url(#{element_id})")
    };

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    );
    out.push_str("<defs>\n");
    if !definition.is_empty() {
        out.push_str(&definition);
        out.push('\n');
    }
    out.push_str("</defs>\n");
    out.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{fill}\"/>\n"
    ));
    out.push_str("</svg>\n");
    out
}

/// XML-safe element id for a gradient: `gradient-<id>` with every character
/// outside `[A-Za-z0-9_-]` replaced by `-`.
pub fn svg_element_id(gradient_id: &str) -> String {
    format!("gradient-{}", xml_name(gradient_id))
}

fn xml_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect()
}
