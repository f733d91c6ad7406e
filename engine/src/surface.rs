use crate::graphics::{Color, CpuRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// A simple in-memory RGBA surface for headless rendering and tests.
///
/// Windowed runs draw into the `pixels` frame buffer instead; both go through
/// `CpuRenderer`, so a frame rendered here is byte-identical to the one presented.
#[derive(Debug, Clone)]
pub struct RgbaBufferSurface {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaBufferSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    pub fn renderer(&mut self) -> CpuRenderer<'_> {
        CpuRenderer::new(&mut self.buf, self.size)
    }

    /// Returns the RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = ((y as usize) * (self.size.width as usize) + x as usize) * 4;
        let px = self.buf.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::Renderer2d;

    #[test]
    fn rgba_len_is_four_bytes_per_pixel() {
        assert_eq!(SurfaceSize::new(800, 600).rgba_len(), 800 * 600 * 4);
    }

    #[test]
    fn pixel_reads_back_what_the_renderer_wrote() {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(4, 3));
        surface.renderer().clear([9, 8, 7, 255]);

        assert_eq!(surface.pixel(3, 2), Some([9, 8, 7, 255]));
        assert_eq!(surface.pixel(4, 0), None);
    }
}
