//! Gradient model shared between serializers, the contrast audit and renderers.
//!
//! Scope:
//! - `Gradient` / `Stop` value types and their ordering rules
//! - CSS and SVG text serializers
//!
//! Serializers sort and clamp independently; none assumes another has
//! normalized the input.

pub mod css;
pub mod gradient;
pub mod svg;

pub use css::{to_css_linear, CSS_FALLBACK};
pub use gradient::{clamp_unit, Gradient, GradientKind, Stop};
pub use svg::{gradient_vector, svg_element_id, to_svg_definition, to_svg_file};
