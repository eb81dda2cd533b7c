use egui::Color32;

use crate::stroke::Brush;
use crate::surface::CanvasSize;

pub const DEFAULT_SECTIONS: f64 = 16.0;
pub const DEFAULT_THICKNESS: f32 = 1.0;
pub const DEFAULT_CANVAS_SIDE: u32 = 500;
pub const COMPACT_CANVAS_SIDE: u32 = 200;
/// Windows narrower than this get the compact canvas
pub const WIDE_LAYOUT_MIN_WIDTH: f32 = 800.0;

/// Drawing configuration edited from the tools panel.
///
/// `sections` is kept as the raw number from the input field; it only becomes
/// a validated section count when a stroke starts.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSettings {
    pub color: Color32,
    pub thickness: f32,
    pub sections: f64,
    pub mirror: bool,
    pub canvas_side: u32,
    /// Follow the window width between the default and compact canvas sizes
    pub responsive: bool,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            thickness: DEFAULT_THICKNESS,
            sections: DEFAULT_SECTIONS,
            mirror: true,
            canvas_side: DEFAULT_CANVAS_SIDE,
            responsive: true,
        }
    }
}

impl DrawingSettings {
    pub fn brush(&self) -> Brush {
        Brush::new(self.color, self.thickness)
    }

    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize {
            width: self.canvas_side,
            height: self.canvas_side,
        }
    }

    /// Canvas side for a window of the given width
    pub fn side_for_window(window_width: f32) -> u32 {
        if window_width >= WIDE_LAYOUT_MIN_WIDTH {
            DEFAULT_CANVAS_SIDE
        } else {
            COMPACT_CANVAS_SIDE
        }
    }
}
