use egui::Pos2;

use crate::error::ConfigurationError;
use crate::history::StrokeHistory;
use crate::state::DrawingState;
use crate::stroke::{Brush, MutableStroke, StrokeRef};
use crate::surface::{CanvasSize, Surface};
use crate::symmetry::{self, SectionCount, Symmetry};

/// A drawing surface together with the strokes that produced it.
///
/// Pointer gestures come in through `begin_stroke`, `append_point` and
/// `end_stroke`. While a stroke is open only the newest segment is painted;
/// whenever the set of visible strokes changes the surface is cleared and
/// every visible stroke is replayed in order.
pub struct Canvas<S: Surface> {
    surface: S,
    history: StrokeHistory,
    state: DrawingState,
}

impl<S: Surface> Canvas<S> {
    pub fn new(mut surface: S) -> Self {
        surface.clear();
        Self {
            surface,
            history: StrokeHistory::new(),
            state: DrawingState::Idle,
        }
    }

    /// Open a new stroke at `point`.
    ///
    /// The section count comes straight from user input and is validated here;
    /// on error nothing changes. Symmetry settings are frozen into the stroke.
    pub fn begin_stroke(
        &mut self,
        point: Pos2,
        brush: Brush,
        sections: f64,
        mirror: bool,
    ) -> Result<(), ConfigurationError> {
        let sections = SectionCount::try_from(sections).inspect_err(|err| {
            log::warn!("Rejected stroke start: {}", err);
        })?;
        let brush = brush.validate().inspect_err(|err| {
            log::warn!("Rejected stroke start: {}", err);
        })?;

        if self.state.is_drawing() {
            log::warn!("Stroke started while another was open; ending the previous one");
            self.end_stroke();
        }

        let symmetry = Symmetry::new(sections, mirror);
        self.state = DrawingState::Drawing {
            stroke: MutableStroke::new(point, brush, symmetry),
        };
        Ok(())
    }

    /// Extend the open stroke and paint its newest segment. Ignored when idle.
    pub fn append_point(&mut self, point: Pos2) {
        let pivot = self.pivot();
        let Some(stroke) = self.state.live_stroke_mut() else {
            return;
        };
        stroke.add_point(point);

        if let Some((p0, p1)) = stroke.last_segment() {
            let segments =
                symmetry::expand_segment(p0, p1, stroke.symmetry(), pivot, stroke.brush());
            self.surface.paint(&segments);
        }
    }

    /// Commit the open stroke to history. Ignored when idle.
    pub fn end_stroke(&mut self) {
        let Some(stroke) = self.state.finish() else {
            return;
        };
        if stroke.points().is_empty() {
            return;
        }
        log::debug!(
            "Committing stroke with {} point(s), {} section(s)",
            stroke.points().len(),
            stroke.symmetry().sections.get()
        );
        // The live preview already painted this stroke, so no replay is needed.
        self.history.commit(stroke.into_stroke_ref());
    }

    /// Hide the newest visible stroke. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        self.end_stroke();
        let changed = self.history.undo();
        if changed {
            log::debug!("Undo: {} of {} stroke(s) visible", self.history.cursor(), self.history.len());
            self.redraw();
        }
        changed
    }

    /// Bring back the next undone stroke. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        self.end_stroke();
        let changed = self.history.redo();
        if changed {
            log::debug!("Redo: {} of {} stroke(s) visible", self.history.cursor(), self.history.len());
            self.redraw();
        }
        changed
    }

    /// Remove every stroke. Nothing can be redone afterwards.
    pub fn clear(&mut self) {
        self.state = DrawingState::Idle;
        self.history.clear();
        self.surface.clear();
        log::info!("Canvas cleared");
    }

    /// Change the canvas dimensions.
    ///
    /// All strokes are pivot-relative, so a size change drops the history.
    /// Returns `true` when strokes were discarded so the caller can tell the user.
    pub fn resize(&mut self, size: CanvasSize) -> Result<bool, ConfigurationError> {
        let size = CanvasSize::new(size.width, size.height)?;
        if size == self.surface.size() {
            return Ok(false);
        }

        let dropped = !self.history.is_empty();
        self.state = DrawingState::Idle;
        self.history.clear();
        self.surface.resize(size);
        self.surface.clear();

        log::info!(
            "Canvas resized to {}x{}{}",
            size.width,
            size.height,
            if dropped { ", strokes cleared" } else { "" }
        );
        Ok(dropped)
    }

    /// Clear the surface and replay every visible stroke onto it
    pub fn redraw(&mut self) {
        let pivot = self.pivot();
        self.surface.clear();
        for stroke in self.history.visible() {
            self.surface.paint(&symmetry::replay_stroke(stroke, pivot));
        }
    }

    pub fn visible_strokes(&self) -> &[StrokeRef] {
        self.history.visible()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn live_stroke(&self) -> Option<&MutableStroke> {
        self.state.live_stroke()
    }

    pub fn size(&self) -> CanvasSize {
        self.surface.size()
    }

    pub fn pivot(&self) -> Pos2 {
        self.surface.size().pivot()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DisplayList;
    use egui::Color32;

    fn canvas() -> Canvas<DisplayList> {
        Canvas::new(DisplayList::new(CanvasSize::square(500).unwrap()))
    }

    fn draw(canvas: &mut Canvas<DisplayList>, points: &[(f32, f32)], sections: f64, mirror: bool) {
        let (x, y) = points[0];
        canvas
            .begin_stroke(Pos2::new(x, y), Brush::default(), sections, mirror)
            .unwrap();
        for &(x, y) in &points[1..] {
            canvas.append_point(Pos2::new(x, y));
        }
        canvas.end_stroke();
    }

    #[test]
    fn test_append_paints_incrementally() {
        let mut canvas = canvas();
        canvas
            .begin_stroke(Pos2::new(260.0, 250.0), Brush::default(), 4.0, true)
            .unwrap();
        assert!(canvas.surface().is_empty());

        canvas.append_point(Pos2::new(260.0, 200.0));
        assert_eq!(canvas.surface().len(), 8);

        canvas.append_point(Pos2::new(280.0, 200.0));
        assert_eq!(canvas.surface().len(), 16);
    }

    #[test]
    fn test_live_paint_matches_replay() {
        let mut canvas = canvas();
        draw(&mut canvas, &[(300.0, 250.0), (320.0, 240.0), (330.0, 200.0)], 6.0, true);
        let live: Vec<_> = canvas.surface().segments().to_vec();

        canvas.redraw();
        assert_eq!(canvas.surface().segments(), live.as_slice());
    }

    #[test]
    fn test_rejected_start_stays_idle() {
        let mut canvas = canvas();
        let result = canvas.begin_stroke(Pos2::new(1.0, 1.0), Brush::default(), 0.0, true);
        assert_eq!(result, Err(ConfigurationError::TooFewSections(0.0)));
        assert!(!canvas.is_drawing());

        canvas.append_point(Pos2::new(2.0, 2.0));
        canvas.end_stroke();
        assert!(canvas.surface().is_empty());
        assert!(canvas.history().is_empty());
    }

    #[test]
    fn test_rejected_thickness() {
        let mut canvas = canvas();
        let brush = Brush::new(Color32::BLACK, -1.0);
        let result = canvas.begin_stroke(Pos2::new(1.0, 1.0), brush, 4.0, false);
        assert_eq!(result, Err(ConfigurationError::InvalidThickness(-1.0)));
        assert!(!canvas.is_drawing());
    }

    #[test]
    fn test_begin_while_drawing_commits_previous() {
        let mut canvas = canvas();
        canvas
            .begin_stroke(Pos2::new(10.0, 10.0), Brush::default(), 4.0, false)
            .unwrap();
        canvas.append_point(Pos2::new(20.0, 20.0));
        canvas
            .begin_stroke(Pos2::new(30.0, 30.0), Brush::default(), 4.0, false)
            .unwrap();

        assert_eq!(canvas.history().len(), 1);
        assert_eq!(canvas.live_stroke().map(|s| s.points().len()), Some(1));
    }

    #[test]
    fn test_undo_while_drawing_commits_then_undoes() {
        let mut canvas = canvas();
        canvas
            .begin_stroke(Pos2::new(10.0, 10.0), Brush::default(), 4.0, false)
            .unwrap();
        canvas.append_point(Pos2::new(20.0, 20.0));

        assert!(canvas.undo());
        assert!(!canvas.is_drawing());
        assert!(canvas.visible_strokes().is_empty());
        assert!(canvas.surface().is_empty());
        assert!(canvas.history().can_redo());
    }

    #[test]
    fn test_undo_replays_remaining_strokes() {
        let mut canvas = canvas();
        draw(&mut canvas, &[(260.0, 250.0), (260.0, 200.0)], 4.0, false);
        draw(&mut canvas, &[(300.0, 300.0), (310.0, 320.0), (330.0, 330.0)], 3.0, true);
        assert_eq!(canvas.surface().len(), 4 + 12);

        assert!(canvas.undo());
        assert_eq!(canvas.surface().len(), 4);

        assert!(canvas.redo());
        assert_eq!(canvas.surface().len(), 16);
    }

    #[test]
    fn test_settings_are_frozen_per_stroke() {
        let mut canvas = canvas();
        draw(&mut canvas, &[(260.0, 250.0), (260.0, 200.0)], 4.0, false);
        draw(&mut canvas, &[(260.0, 250.0), (260.0, 200.0)], 12.0, true);

        canvas.redraw();
        assert_eq!(canvas.surface().len(), 4 + 24);
        assert_eq!(canvas.visible_strokes()[0].symmetry().sections.get(), 4);
        assert!(!canvas.visible_strokes()[0].symmetry().mirror);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut canvas = canvas();
        draw(&mut canvas, &[(260.0, 250.0), (260.0, 200.0)], 4.0, false);
        canvas
            .begin_stroke(Pos2::new(1.0, 1.0), Brush::default(), 4.0, false)
            .unwrap();

        canvas.clear();
        assert!(!canvas.is_drawing());
        assert!(canvas.history().is_empty());
        assert!(canvas.surface().is_empty());
        assert!(!canvas.redo());
    }

    #[test]
    fn test_resize_clears_history() {
        let mut canvas = canvas();
        assert_eq!(canvas.resize(CanvasSize::square(500).unwrap()), Ok(false));

        draw(&mut canvas, &[(260.0, 250.0), (260.0, 200.0)], 4.0, false);
        assert_eq!(canvas.resize(CanvasSize::square(200).unwrap()), Ok(true));
        assert!(canvas.history().is_empty());
        assert!(canvas.surface().is_empty());
        assert_eq!(canvas.pivot(), Pos2::new(100.0, 100.0));

        assert_eq!(canvas.resize(CanvasSize::square(300).unwrap()), Ok(false));
    }

    #[test]
    fn test_resize_rejects_empty_size() {
        let mut canvas = canvas();
        let result = canvas.resize(CanvasSize {
            width: 0,
            height: 10,
        });
        assert!(matches!(result, Err(ConfigurationError::EmptyCanvas { .. })));
        assert_eq!(canvas.size(), CanvasSize::square(500).unwrap());
    }
}
