use crate::canvas::Canvas;
use crate::error::ConfigurationError;
use crate::settings::DrawingSettings;
use crate::surface::Surface;

use super::{HistoryAction, InputEvent};

/// Apply an input event to the canvas using the current drawing settings
pub fn route_event<S: Surface>(
    event: &InputEvent,
    canvas: &mut Canvas<S>,
    settings: &DrawingSettings,
) -> Result<(), ConfigurationError> {
    match event {
        InputEvent::PointerDown { location } => {
            canvas.begin_stroke(
                location.position,
                settings.brush(),
                settings.sections,
                settings.mirror,
            )?;
        }
        InputEvent::PointerMove { location } => canvas.append_point(location.position),
        InputEvent::PointerUp { .. } | InputEvent::PointerLeave { .. } => canvas.end_stroke(),
        InputEvent::Shortcut(HistoryAction::Undo) => {
            canvas.undo();
        }
        InputEvent::Shortcut(HistoryAction::Redo) => {
            canvas.redo();
        }
    }
    Ok(())
}
