//! GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - exposing the initialization knobs (`GpuInit`)
//!
//! It knows nothing about gradients; see `render` for the pipeline.

mod gpu;
mod init;

pub use gpu::Gpu;
pub use init::GpuInit;
