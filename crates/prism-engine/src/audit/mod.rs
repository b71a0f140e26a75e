//! Contrast audit of gradient stops.
//!
//! Adjacent stops (in position order) are compared with the WCAG 2.x contrast
//! ratio. Pairs under the threshold are reported by stop id.

mod contrast;

pub use contrast::{
    audit, audit_default, contrast_pairs, contrast_ratio, relative_luminance, PairContrast,
    DEFAULT_THRESHOLD,
};
