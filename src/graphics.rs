use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::grid::Point;
use crate::renderer;
use crate::viewport::SurfaceLayout;

/// Owns the pixels surface. The backing buffer is sized to the surface
/// layout and never changes; an OS-imposed window resize only rescales
/// the presented texture, which the coordinate mapper corrects for.
pub struct GraphicsRenderer {
    pixels: Pixels,
    layout: SurfaceLayout,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, layout: SurfaceLayout) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(
            layout.surface_width.max(1),
            layout.surface_height.max(1),
            surface_texture,
        )?;

        Ok(Self { pixels, layout })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::warn!("Failed to resize surface: {}", err);
        }
    }

    pub fn render(&mut self, active_points: &[Point]) {
        renderer::draw(self.pixels.frame_mut(), &self.layout, active_points);
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
