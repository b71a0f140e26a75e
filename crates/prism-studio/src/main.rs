use std::path::PathBuf;

use anyhow::{Context, Result};
use prism_engine::audit::{contrast_pairs, DEFAULT_THRESHOLD};
use prism_engine::color::{lerp_polar, OkLab};
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::paint::{to_css_linear, to_svg_file, Gradient};
use prism_engine::render::{Canvas, GradientRenderer, RenderError, RendererConfig};

const WIDTH: u32 = 512;
const HEIGHT: u32 = 128;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let png_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("prism-gradient.png"));
    let svg_path = png_path.with_extension("svg");

    let gradient = demo_gradient()?;

    println!();
    println!("  ── {} ──", gradient.id);
    println!();
    println!("  css   {}", to_css_linear(&gradient));
    println!();

    print_contrast_report(&gradient);

    std::fs::write(&svg_path, to_svg_file(&gradient, WIDTH, HEIGHT))
        .with_context(|| format!("failed to write {}", svg_path.display()))?;
    println!("  svg   {}", svg_path.display());

    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let mut renderer = GradientRenderer::new(RendererConfig::default());
    match renderer.render_blocking(&gradient, &mut canvas) {
        Ok(()) => {
            if let Some(gpu) = renderer.gpu() {
                println!("  gpu   {}", gpu.adapter_info().name);
            }
        }
        Err(RenderError::GpuUnavailable(reason)) => {
            log::warn!("writing placeholder image: {reason}");
        }
        Err(err) => return Err(err).context("gradient render failed"),
    }

    let image = image::RgbaImage::from_raw(WIDTH, HEIGHT, canvas.pixels().to_vec())
        .context("canvas size does not match its pixel buffer")?;
    image
        .save(&png_path)
        .with_context(|| format!("failed to write {}", png_path.display()))?;
    println!("  png   {}", png_path.display());
    println!();

    Ok(())
}

/// Sunset ramp. The middle stop is the Oklch midpoint of its neighbours.
fn demo_gradient() -> Result<Gradient> {
    let indigo = OkLab::from_hex("#1e1b4b")?;
    let coral = OkLab::from_hex("#ff7f50")?;
    let gold = OkLab::from_hex("#ffd700")?;
    let magenta = lerp_polar(indigo.to_polar(), coral.to_polar(), 0.5).to_opponent();

    Ok(Gradient::linear("sunset", 90.0)
        .with_stop("indigo", 0.0, indigo)
        .with_stop("magenta", 0.35, magenta)
        .with_stop("coral", 0.7, coral)
        .with_stop("gold", 1.0, gold))
}

fn print_contrast_report(gradient: &Gradient) {
    println!("  contrast (threshold {DEFAULT_THRESHOLD}:1)");
    for pair in contrast_pairs(gradient) {
        let verdict = if pair.passes(DEFAULT_THRESHOLD) { "ok" } else { "LOW" };
        println!(
            "    {:<8} → {:<8} {:>6.2}:1  {verdict}",
            pair.first, pair.second, pair.ratio
        );
    }
    println!();
}
