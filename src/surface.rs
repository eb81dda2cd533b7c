use egui::{Color32, Pos2};

use crate::error::ConfigurationError;
use crate::symmetry::RenderSegment;

/// Pixel dimensions of the drawing area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::EmptyCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn square(side: u32) -> Result<Self, ConfigurationError> {
        Self::new(side, side)
    }

    /// Center of the canvas, the pivot for every symmetry transform
    pub fn pivot(&self) -> Pos2 {
        Pos2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    pub fn to_vec2(self) -> egui::Vec2 {
        egui::vec2(self.width as f32, self.height as f32)
    }
}

/// Something lines can be stroked onto.
///
/// The drawing core only ever clears a surface or strokes single lines on it,
/// so any backend that can do those two things can display a mandala.
pub trait Surface {
    fn size(&self) -> CanvasSize;

    /// Change dimensions. The contents are discarded.
    fn resize(&mut self, size: CanvasSize);

    fn clear(&mut self);

    fn stroke_line(&mut self, from: Pos2, to: Pos2, color: Color32, thickness: f32);

    fn paint(&mut self, segments: &[RenderSegment]) {
        for segment in segments {
            self.stroke_line(segment.from, segment.to, segment.color, segment.thickness);
        }
    }
}

/// Retained list of stroked lines, repainted by the UI every frame
#[derive(Debug, Clone)]
pub struct DisplayList {
    size: CanvasSize,
    segments: Vec<RenderSegment>,
}

impl DisplayList {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            segments: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[RenderSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Surface for DisplayList {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn resize(&mut self, size: CanvasSize) {
        self.size = size;
        self.segments.clear();
    }

    fn clear(&mut self) {
        self.segments.clear();
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, color: Color32, thickness: f32) {
        self.segments.push(RenderSegment {
            from,
            to,
            color,
            thickness,
        });
    }
}
