use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Identity of a render target. Renderers cache per-target GPU state by this key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SurfaceId(u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Off-screen drawable surface.
///
/// Pixels are straight RGBA8, sRGB encoded, row-major with no padding.
/// `width`/`height` are fixed for the canvas lifetime (minimum 1×1).
///
/// A canvas either supports GPU presentation ([`Canvas::new`]) or only the 2D
/// raster path ([`Canvas::raster_only`]).
#[derive(Debug)]
pub struct Canvas {
    id: SurfaceId,
    width: u32,
    height: u32,
    gpu_presentable: bool,
    pixels: Vec<u8>,
    /// Dropped with the canvas; renderers hold a `Weak` to prune their caches.
    alive: Arc<()>,
}

impl Canvas {
    /// GPU-capable canvas, initially transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_support(width, height, true)
    }

    /// Canvas without a GPU presentation context.
    pub fn raster_only(width: u32, height: u32) -> Self {
        Self::with_support(width, height, false)
    }

    fn with_support(width: u32, height: u32, gpu_presentable: bool) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            id: SurfaceId(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed)),
            width,
            height,
            gpu_presentable,
            pixels: vec![0; width as usize * height as usize * 4],
            alive: Arc::new(()),
        }
    }

    #[inline]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether a GPU presentation context can be created for this canvas.
    #[inline]
    pub fn supports_gpu(&self) -> bool {
        self.gpu_presentable
    }

    /// Handle that stops upgrading once this canvas is dropped.
    #[inline]
    pub(crate) fn liveness(&self) -> Weak<()> {
        Arc::downgrade(&self.alive)
    }

    /// Raw RGBA8 pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable pixel data for the raster paths and GPU readback.
    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Returns the RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    /// Fills every pixel with `rgba`.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }
}
