use std::fmt;

use super::SurfaceId;

/// Failure of a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No adapter or device could be acquired. The fallback raster has already
    /// been drawn when this is returned from `render`.
    GpuUnavailable(String),
    /// The target cannot host a GPU presentation context. Fatal for this call
    /// only; the device and pipeline stay valid.
    ContextUnavailable(SurfaceId),
    /// The target exceeds the device's texture or buffer limits. Fatal for
    /// this call only; nothing is cached for the target.
    TargetTooLarge {
        target: SurfaceId,
        width: u32,
        height: u32,
        max_dimension: u32,
    },
    /// Submission or readback failed. Not retried.
    Submission(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::GpuUnavailable(reason) => write!(f, "GPU unavailable: {reason}"),
            RenderError::ContextUnavailable(id) => {
                write!(f, "{id} does not support a GPU rendering context")
            }
            RenderError::TargetTooLarge {
                target,
                width,
                height,
                max_dimension,
            } => write!(
                f,
                "{target} is {width}x{height}, beyond the device limit (max {max_dimension} per side)"
            ),
            RenderError::Submission(reason) => write!(f, "GPU submission failed: {reason}"),
        }
    }
}

impl std::error::Error for RenderError {}
