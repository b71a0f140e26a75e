use super::{RenderError, TARGET_FORMAT};

/// Per-target GPU state: render texture plus a readback buffer.
///
/// Created once per `Canvas` and reused; canvas dimensions never change, so the
/// context never needs reconfiguring.
pub(super) struct TargetContext {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    readback: wgpu::Buffer,
    width: u32,
    height: u32,
    /// Row pitch of `readback`, rounded up to `COPY_BYTES_PER_ROW_ALIGNMENT`.
    padded_bytes_per_row: u32,
}

impl TargetContext {
    pub(super) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("prism target texture"),
            size: extent(width, height),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let padded_bytes_per_row = padded_row_bytes(width);
        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism target readback"),
            size: padded_bytes_per_row as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        Self {
            texture,
            view,
            readback,
            width,
            height,
            padded_bytes_per_row,
        }
    }

    #[inline]
    pub(super) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Records a copy of the render texture into the readback buffer.
    pub(super) fn record_readback(&self, encoder: &mut wgpu::CommandEncoder) {
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &self.readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(self.padded_bytes_per_row),
                    rows_per_image: Some(self.height),
                },
            },
            extent(self.width, self.height),
        );
    }

    /// Maps the readback buffer and copies unpadded rows into `pixels`.
    ///
    /// Blocks until the device has finished the submitted work.
    pub(super) fn read_into(&self, device: &wgpu::Device, pixels: &mut [u8]) -> Result<(), RenderError> {
        let slice = self.readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        device
            .poll(wgpu::PollType::wait_indefinitely())
            .map_err(|e| RenderError::Submission(format!("device poll failed: {e}")))?;

        match rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(RenderError::Submission(format!("readback map failed: {e}"))),
            Err(_) => return Err(RenderError::Submission("readback map callback dropped".into())),
        }

        {
            let data = slice.get_mapped_range();
            let row_bytes = self.width as usize * 4;
            for (dst, src) in pixels
                .chunks_exact_mut(row_bytes)
                .zip(data.chunks_exact(self.padded_bytes_per_row as usize))
            {
                dst.copy_from_slice(&src[..row_bytes]);
            }
        }
        self.readback.unmap();
        Ok(())
    }
}

#[inline]
fn extent(width: u32, height: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    }
}

/// Bytes per RGBA8 row, rounded up to the copy alignment.
pub(super) fn padded_row_bytes(width: u32) -> u32 {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    (width * 4).div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_padding_rounds_up_to_alignment() {
        assert_eq!(padded_row_bytes(1), 256);
        assert_eq!(padded_row_bytes(64), 256);
        assert_eq!(padded_row_bytes(65), 512);
    }
}
