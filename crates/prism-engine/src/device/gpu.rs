use anyhow::{Context, Result};

use super::GpuInit;

/// Owns wgpu core objects for off-screen rendering.
///
/// This type is the low-level rendering context:
/// - creates the Instance, then stores Adapter/Device/Queue
/// - reports which adapter was selected
///
/// There is no swapchain: render targets are textures owned by the renderer.
pub struct Gpu {
    /// Selected adapter.
    adapter: wgpu::Adapter,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,
}

impl Gpu {
    /// Acquires an adapter and a device.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu. Failure means the
    /// GPU path is unavailable on this machine.
    pub async fn new(init: &GpuInit) -> Result<Self> {
        anyhow::ensure!(!init.backends.is_empty(), "no GPU backends enabled");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: None,
                force_fallback_adapter: init.force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("prism-engine device"),
                required_features: init.required_features,
                required_limits: init.required_limits.clone().using_resolution(adapter.limits()),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let info = adapter.get_info();
        log::info!(
            "GPU adapter acquired: {} ({:?}, {:?})",
            info.name,
            info.backend,
            info.device_type
        );

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }

    /// Returns adapter metadata (name, backend, device type).
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
