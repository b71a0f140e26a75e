//! CPU raster paths.
//!
//! - [`shade`] is the per-pixel reference for `fs_main` in `shaders/gradient.wgsl`,
//!   evaluated in `f32` from the same packed uniform.
//! - [`rasterize`] fills a canvas with that reference.
//! - [`fill_placeholder`] is the flat fill used when no GPU is available.

use crate::color::encode_channel;
use crate::paint::Gradient;

use super::uniform::GradientUniform;
use super::Canvas;

/// Segments narrower than this interpolate with factor 0 (start color).
pub const SEGMENT_EPSILON: f32 = 1e-6;

/// Color of the gradient at normalized target position `uv` (top-left origin,
/// +Y down), in linear RGB.
pub fn shade(uniform: &GradientUniform, uv: [f32; 2]) -> [f32; 3] {
    let stops = uniform.active_stops();
    match stops {
        [] => return [0.0; 3],
        [only] => return only.rgb(),
        _ => {}
    }

    let dir = [uniform.angle_rad.sin(), -uniform.angle_rad.cos()];
    let t = ((uv[0] - 0.5) * dir[0] + (uv[1] - 0.5) * dir[1] + 0.5).clamp(0.0, 1.0);

    let last = stops.len() - 2;
    let seg = (0..=last)
        .find(|&i| t <= stops[i + 1].position)
        .unwrap_or(last);
    let (a, b) = (&stops[seg], &stops[seg + 1]);

    let width = b.position - a.position;
    let f = if width > SEGMENT_EPSILON {
        ((t - a.position) / width).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let (ca, cb) = (a.rgb(), b.rgb());
    [0, 1, 2].map(|i| ca[i] * (1.0 - f) + cb[i] * f)
}

/// Renders `gradient` into `canvas` on the CPU, sampling pixel centers.
pub fn rasterize(gradient: &Gradient, canvas: &mut Canvas) {
    let uniform = GradientUniform::pack(gradient);
    let (width, height) = canvas.size();
    let pixels = canvas.pixels_mut();

    for y in 0..height {
        let v = (y as f32 + 0.5) / height as f32;
        for x in 0..width {
            let u = (x as f32 + 0.5) / width as f32;
            let [r, g, b] = shade(&uniform, [u, v]);
            let i = (y as usize * width as usize + x as usize) * 4;
            pixels[i] = encode_channel(r as f64);
            pixels[i + 1] = encode_channel(g as f64);
            pixels[i + 2] = encode_channel(b as f64);
            pixels[i + 3] = 255;
        }
    }
}

/// Fills the canvas with a flat placeholder color.
pub fn fill_placeholder(canvas: &mut Canvas, rgba: [u8; 4]) {
    canvas.fill(rgba);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::OkLab;

    fn black_to_white(angle: f64) -> Gradient {
        Gradient::linear("g", angle)
            .with_stop("w", 1.0, OkLab::white())
            .with_stop("k", 0.0, OkLab::black())
    }

    // ── shade ─────────────────────────────────────────────────────────────

    #[test]
    fn zero_stops_shade_black() {
        let u = GradientUniform::pack(&Gradient::linear("g", 0.0));
        assert_eq!(shade(&u, [0.3, 0.7]), [0.0; 3]);
    }

    #[test]
    fn single_stop_is_flat() {
        let u = GradientUniform::pack(&Gradient::linear("g", 33.0).with_stop("a", 0.8, OkLab::white()));
        let c = u.stops[0].rgb();
        assert_eq!(shade(&u, [0.0, 0.0]), c);
        assert_eq!(shade(&u, [1.0, 1.0]), c);
    }

    #[test]
    fn ninety_degrees_runs_left_to_right() {
        let u = GradientUniform::pack(&black_to_white(90.0));
        assert_eq!(shade(&u, [0.0, 0.5]), [0.0; 3]);
        let right = shade(&u, [1.0, 0.5]);
        assert!(right.iter().all(|&c| (c - 1.0).abs() < 1e-3), "{right:?}");
        let mid = shade(&u, [0.5, 0.1]);
        assert!(mid.iter().all(|&c| (c - 0.5).abs() < 1e-3), "{mid:?}");
    }

    #[test]
    fn zero_degrees_runs_bottom_to_top() {
        let u = GradientUniform::pack(&black_to_white(0.0));
        assert_eq!(shade(&u, [0.5, 1.0]), [0.0; 3]);
        assert!(shade(&u, [0.5, 0.0])[0] > 0.99);
    }

    #[test]
    fn t_before_first_stop_uses_first_color() {
        let g = Gradient::linear("g", 90.0)
            .with_stop("k", 0.4, OkLab::black())
            .with_stop("w", 0.6, OkLab::white());
        let u = GradientUniform::pack(&g);
        assert_eq!(shade(&u, [0.1, 0.5]), [0.0; 3]);
        assert!(shade(&u, [0.9, 0.5])[1] > 0.99);
    }

    #[test]
    fn hard_stop_does_not_divide_by_zero() {
        let g = Gradient::linear("g", 90.0)
            .with_stop("k0", 0.0, OkLab::black())
            .with_stop("k1", 0.5, OkLab::black())
            .with_stop("w0", 0.5, OkLab::white())
            .with_stop("w1", 1.0, OkLab::white());
        let u = GradientUniform::pack(&g);
        for x in [0.49f32, 0.5, 0.51] {
            let c = shade(&u, [x, 0.5]);
            assert!(c.iter().all(|v| v.is_finite()));
        }
        assert_eq!(shade(&u, [0.25, 0.5]), [0.0; 3]);
        assert!(shade(&u, [0.75, 0.5])[0] > 0.99);
    }

    #[test]
    fn segment_search_picks_middle_segment() {
        let red = OkLab::from_hex("#ff0000").unwrap();
        let g = Gradient::linear("g", 90.0)
            .with_stop("k", 0.0, OkLab::black())
            .with_stop("r", 0.5, red)
            .with_stop("w", 1.0, OkLab::white());
        let u = GradientUniform::pack(&g);
        let c = shade(&u, [0.5, 0.5]);
        assert!(c[0] > 0.99 && c[1] < 0.01 && c[2] < 0.01, "{c:?}");
    }

    // ── rasterize / placeholder ───────────────────────────────────────────

    #[test]
    fn rasterize_zero_stops_is_opaque_black() {
        let mut canvas = Canvas::raster_only(4, 3);
        rasterize(&Gradient::linear("g", 0.0), &mut canvas);
        assert!(canvas.pixels().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn rasterize_horizontal_ramp_is_monotonic() {
        let mut canvas = Canvas::raster_only(16, 2);
        rasterize(&black_to_white(90.0), &mut canvas);
        let row: Vec<u8> = (0..16).map(|x| canvas.pixel(x, 0).unwrap()[0]).collect();
        assert!(row.windows(2).all(|w| w[0] <= w[1]), "{row:?}");
        assert!(row[0] < 60 && row[15] > 245, "{row:?}");
        assert_eq!(canvas.pixel(7, 0), canvas.pixel(7, 1));
    }

    #[test]
    fn rasterize_samples_pixel_centers_in_linear_light() {
        // Pixel centers sit at t = 0.25 and 0.75 in linear light.
        let mut canvas = Canvas::raster_only(2, 1);
        rasterize(&black_to_white(90.0), &mut canvas);
        let left = canvas.pixel(0, 0).unwrap()[0] as i32;
        let right = canvas.pixel(1, 0).unwrap()[0] as i32;
        assert!((left - 137).abs() <= 2, "left = {left}");
        assert!((right - 225).abs() <= 2, "right = {right}");
    }

    #[test]
    fn placeholder_is_flat() {
        let mut canvas = Canvas::new(5, 5);
        fill_placeholder(&mut canvas, [10, 20, 30, 255]);
        assert!(canvas.pixels().chunks_exact(4).all(|px| px == [10, 20, 30, 255]));
    }
}
