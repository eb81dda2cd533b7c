use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use crate::surface::{CanvasSize, Surface};

/// Software pixel surface backed by an RGBA image buffer.
///
/// Lines are drawn without anti-aliasing by stamping a square brush at every
/// pixel step along the longer axis. Anything outside the buffer is clipped.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    background: Rgba<u8>,
}

impl RasterSurface {
    /// Transparent surface, the same as a freshly created HTML canvas
    pub fn new(size: CanvasSize) -> Self {
        Self::with_background(size, Color32::TRANSPARENT)
    }

    pub fn with_background(size: CanvasSize, background: Color32) -> Self {
        let background = to_rgba(background);
        Self {
            image: RgbaImage::from_pixel(size.width, size.height, background),
            background,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    fn stamp(&mut self, center: Pos2, half: f32, color: Rgba<u8>) {
        let (width, height) = self.image.dimensions();
        let min_x = (center.x - half - 0.5).ceil().max(0.0) as i64;
        let max_x = (center.x + half - 0.5).floor() as i64;
        let min_y = (center.y - half - 0.5).ceil().max(0.0) as i64;
        let max_y = (center.y + half - 0.5).floor() as i64;

        for y in min_y..=max_y.min(i64::from(height) - 1) {
            for x in min_x..=max_x.min(i64::from(width) - 1) {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> CanvasSize {
        let (width, height) = self.image.dimensions();
        CanvasSize { width, height }
    }

    fn resize(&mut self, size: CanvasSize) {
        self.image = RgbaImage::from_pixel(size.width, size.height, self.background);
    }

    fn clear(&mut self) {
        let background = self.background;
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, color: Color32, thickness: f32) {
        if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
            return;
        }
        let rgba = to_rgba(color);
        let half = (thickness / 2.0).max(0.5);
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;

        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.stamp(from + delta * t, half, rgba);
        }
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}
