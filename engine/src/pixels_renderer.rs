use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

use pixels::Pixels;

/// Headful renderer built on `pixels`.
///
/// Game code draws through `Renderer2d` into the pixels frame buffer; this type owns the
/// buffer sizing and presentation.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    size: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(mut pixels: Pixels, size: SurfaceSize) -> Result<Self, pixels::Error> {
        pixels.resize_buffer(size.width, size.height)?;
        Ok(Self { pixels, size })
    }

    /// Resizes the presentation surface only.
    ///
    /// The frame buffer keeps its logical size and `pixels` scales it to the window, so
    /// layout coordinates stay fixed while cursor positions need `window_to_pixel`.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    /// Maps a physical window position to frame buffer coordinates, if it lands inside.
    pub fn window_to_pixel(&self, pos: (f32, f32)) -> Option<(u32, u32)> {
        self.pixels
            .window_pos_to_pixel(pos)
            .ok()
            .map(|(x, y)| (x as u32, y as u32))
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.size);
        cpu.begin_frame(self.size);
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
