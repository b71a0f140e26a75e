use std::collections::HashMap;
use std::sync::Weak;

use crate::device::{Gpu, GpuInit};
use crate::paint::Gradient;

use super::ctx::{padded_row_bytes, TargetContext};
use super::pipeline::GradientPipeline;
use super::uniform::{GradientUniform, MAX_STOPS};
use super::{raster, Canvas, RenderError, SurfaceId};

/// What the renderer draws when no GPU is available.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FallbackMode {
    /// Flat fill with [`RendererConfig::placeholder`].
    #[default]
    Placeholder,
    /// Full CPU reference raster of the gradient.
    Reference,
}

/// Renderer configuration.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Adapter/device request parameters.
    pub gpu: GpuInit,

    /// Fallback drawn before `GpuUnavailable` is returned.
    pub fallback: FallbackMode,

    /// RGBA used by [`FallbackMode::Placeholder`].
    pub placeholder: [u8; 4],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            gpu: GpuInit::default(),
            fallback: FallbackMode::Placeholder,
            placeholder: [0x80, 0x80, 0x80, 0xff],
        }
    }
}

/// Device acquisition state. `Unavailable` is terminal.
enum DeviceState {
    Uninitialized,
    Ready(Gpu),
    Unavailable(String),
}

/// Cached per-target state plus a handle that dies with the canvas.
struct CachedTarget {
    owner: Weak<()>,
    ctx: TargetContext,
}

/// Gradient renderer handle.
///
/// Owns the GPU resources that outlive any single gradient:
/// - the device (acquired once, see [`initialize`](Self::initialize))
/// - the compiled pipeline (built once per device)
/// - one context per target, keyed by [`SurfaceId`]
///
/// Contexts of dropped canvases are pruned on the next `render` call, or
/// explicitly with [`prune_dropped_targets`](Self::prune_dropped_targets) /
/// [`release_target`](Self::release_target).
///
/// Methods take `&mut self`, so a second call cannot start while an
/// initialization is still pending. Calls for one canvas are rendered in the
/// order they are awaited.
pub struct GradientRenderer {
    config: RendererConfig,
    device: DeviceState,
    pipeline: Option<GradientPipeline>,
    contexts: HashMap<SurfaceId, CachedTarget>,
    warned_truncation: bool,
}

impl Default for GradientRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl GradientRenderer {
    /// Creates a renderer. No GPU work happens until the first
    /// `initialize` or `render` call.
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            device: DeviceState::Uninitialized,
            pipeline: None,
            contexts: HashMap::new(),
            warned_truncation: false,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Acquires the device on first call; later calls return the cached outcome.
    ///
    /// A failed acquisition is remembered and never retried.
    pub async fn initialize(&mut self) -> Result<(), RenderError> {
        match &self.device {
            DeviceState::Ready(_) => return Ok(()),
            DeviceState::Unavailable(reason) => {
                return Err(RenderError::GpuUnavailable(reason.clone()));
            }
            DeviceState::Uninitialized => {}
        }

        match Gpu::new(&self.config.gpu).await {
            Ok(gpu) => {
                self.device = DeviceState::Ready(gpu);
                Ok(())
            }
            Err(err) => {
                let reason = format!("{err:#}");
                log::warn!("GPU path disabled: {reason}");
                self.device = DeviceState::Unavailable(reason.clone());
                Err(RenderError::GpuUnavailable(reason))
            }
        }
    }

    /// [`initialize`](Self::initialize) driven to completion on the current thread.
    pub fn initialize_blocking(&mut self) -> Result<(), RenderError> {
        pollster::block_on(self.initialize())
    }

    /// True once a device has been acquired.
    pub fn is_ready(&self) -> bool {
        matches!(self.device, DeviceState::Ready(_))
    }

    /// Returns the GPU context when the device is ready.
    pub fn gpu(&self) -> Option<&Gpu> {
        match &self.device {
            DeviceState::Ready(gpu) => Some(gpu),
            _ => None,
        }
    }

    /// Number of targets with a cached context.
    pub fn cached_targets(&self) -> usize {
        self.contexts.len()
    }

    /// Drops the cached context for a target. Returns true when one existed.
    pub fn release_target(&mut self, id: SurfaceId) -> bool {
        self.contexts.remove(&id).is_some()
    }

    /// Drops contexts whose canvas no longer exists. Returns how many were removed.
    pub fn prune_dropped_targets(&mut self) -> usize {
        let before = self.contexts.len();
        self.contexts.retain(|_, cached| cached.owner.strong_count() > 0);
        before - self.contexts.len()
    }

    /// Renders `gradient` into `target`.
    ///
    /// - no device: draws the configured fallback, then returns `GpuUnavailable`
    /// - target without GPU support: returns `ContextUnavailable`, target untouched
    /// - target beyond the device limits: returns `TargetTooLarge`, target untouched
    /// - otherwise: one draw call, then the result is read back into the canvas
    ///
    /// Gradients with more than [`MAX_STOPS`] stops keep the lowest-position ones.
    pub async fn render(&mut self, gradient: &Gradient, target: &mut Canvas) -> Result<(), RenderError> {
        if let Err(err) = self.initialize().await {
            self.draw_fallback(gradient, target);
            return Err(err);
        }

        if !target.supports_gpu() {
            return Err(RenderError::ContextUnavailable(target.id()));
        }

        self.prune_dropped_targets();

        if gradient.stops.len() > MAX_STOPS && !self.warned_truncation {
            log::warn!(
                "gradient {:?} has {} stops; only the first {MAX_STOPS} by position are rendered",
                gradient.id,
                gradient.stops.len()
            );
            self.warned_truncation = true;
        }

        let Self {
            device,
            pipeline,
            contexts,
            ..
        } = self;
        let DeviceState::Ready(gpu) = device else {
            return Err(RenderError::GpuUnavailable("device not initialized".into()));
        };

        if !contexts.contains_key(&target.id()) {
            check_target_limits(target, &gpu.device().limits())?;
        }

        let pipeline = pipeline.get_or_insert_with(|| GradientPipeline::new(gpu.device()));
        let ctx = &contexts
            .entry(target.id())
            .or_insert_with(|| {
                log::debug!("creating context for {} ({}x{})", target.id(), target.width(), target.height());
                CachedTarget {
                    owner: target.liveness(),
                    ctx: TargetContext::new(gpu.device(), target.width(), target.height()),
                }
            })
            .ctx;

        let uniform = GradientUniform::pack(gradient);
        pipeline.write_uniform(gpu.queue(), &uniform);

        let mut encoder = gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("prism gradient encoder"),
            });
        pipeline.record_draw(&mut encoder, ctx.view());
        ctx.record_readback(&mut encoder);
        gpu.queue().submit(std::iter::once(encoder.finish()));

        ctx.read_into(gpu.device(), target.pixels_mut())
    }

    /// [`render`](Self::render) driven to completion on the current thread.
    pub fn render_blocking(&mut self, gradient: &Gradient, target: &mut Canvas) -> Result<(), RenderError> {
        pollster::block_on(self.render(gradient, target))
    }

    fn draw_fallback(&self, gradient: &Gradient, target: &mut Canvas) {
        match self.config.fallback {
            FallbackMode::Placeholder => raster::fill_placeholder(target, self.config.placeholder),
            FallbackMode::Reference => raster::rasterize(gradient, target),
        }
    }
}

/// Rejects targets whose texture or readback buffer the device cannot allocate.
fn check_target_limits(target: &Canvas, limits: &wgpu::Limits) -> Result<(), RenderError> {
    let (width, height) = target.size();
    let max_dimension = limits.max_texture_dimension_2d;
    let too_large = width > max_dimension
        || height > max_dimension
        || padded_row_bytes(width) as u64 * height as u64 > limits.max_buffer_size;

    if too_large {
        return Err(RenderError::TargetTooLarge {
            target: target.id(),
            width,
            height,
            max_dimension,
        });
    }
    Ok(())
}
