use std::path::Path;

use crate::error::ExportError;
use crate::raster::RasterSurface;
use crate::stroke::StrokeRef;
use crate::surface::{CanvasSize, Surface};
use crate::symmetry;

pub const DEFAULT_EXPORT_FILE: &str = "canvas_image.png";

/// Rasterize strokes onto a fresh transparent surface of the given size
pub fn rasterize(strokes: &[StrokeRef], size: CanvasSize) -> RasterSurface {
    let mut surface = RasterSurface::new(size);
    let pivot = size.pivot();
    for stroke in strokes {
        surface.paint(&symmetry::replay_stroke(stroke, pivot));
    }
    surface
}

/// Write the strokes as an image; the format follows the file extension
pub fn export_image(
    strokes: &[StrokeRef],
    size: CanvasSize,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let surface = rasterize(strokes, size);
    surface.image().save(path)?;
    log::info!(
        "Exported {} stroke(s) as {}x{} image to {}",
        strokes.len(),
        size.width,
        size.height,
        path.display()
    );
    Ok(())
}
