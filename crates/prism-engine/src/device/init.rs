/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends wgpu may pick an adapter from.
    ///
    /// An empty set never yields an adapter, which forces the fallback path.
    pub backends: wgpu::Backends,

    /// Adapter power preference.
    pub power_preference: wgpu::PowerPreference,

    /// Request a software adapter (e.g. WARP, llvmpipe) instead of hardware.
    pub force_fallback_adapter: bool,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    ///
    /// The gradient pipeline needs one small uniform buffer and one render
    /// target, so downlevel limits are enough. Texture dimension limits are
    /// raised to whatever the adapter supports.
    pub required_limits: wgpu::Limits,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
        }
    }
}

impl GpuInit {
    /// Configuration that can never acquire an adapter.
    pub fn disabled() -> Self {
        Self {
            backends: wgpu::Backends::empty(),
            ..Self::default()
        }
    }
}
