#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod error;
pub mod export;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;
pub mod settings;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod symmetry;

pub use app::MandalaApp;
pub use canvas::Canvas;
pub use error::{ConfigurationError, ExportError};
pub use history::StrokeHistory;
pub use input::{InputEvent, InputLocation};
pub use raster::RasterSurface;
pub use settings::DrawingSettings;
pub use stroke::{Brush, Stroke, StrokeRef};
pub use surface::{CanvasSize, DisplayList, Surface};
pub use symmetry::{RenderSegment, SectionCount, Symmetry, expand_segment, replay_stroke};
