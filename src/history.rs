use crate::stroke::StrokeRef;

/// Linear undo/redo history over committed strokes.
///
/// `cursor` counts how many leading strokes are visible. Strokes past the
/// cursor are only kept so they can be redone, and are dropped as soon as a
/// new stroke is committed.
#[derive(Debug, Default, Clone)]
pub struct StrokeHistory {
    committed: Vec<StrokeRef>,
    cursor: usize,
}

impl StrokeHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished stroke, discarding anything that could have been redone
    pub fn commit(&mut self, stroke: StrokeRef) {
        let dropped = self.committed.len() - self.cursor;
        if dropped > 0 {
            log::debug!("Dropping {} undone stroke(s) from redo history", dropped);
        }
        self.committed.truncate(self.cursor);
        self.committed.push(stroke);
        self.cursor = self.committed.len();
    }

    /// Hide the newest visible stroke. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Show the next undone stroke again. Returns false when already at the newest state.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Forget every stroke. This is not an undo step.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.cursor = 0;
    }

    /// The strokes currently on the canvas, oldest first
    pub fn visible(&self) -> &[StrokeRef] {
        &self.committed[..self.cursor]
    }

    /// Every stored stroke including the ones waiting to be redone
    pub fn committed(&self) -> &[StrokeRef] {
        &self.committed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.committed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{Brush, MutableStroke};
    use crate::symmetry::{SectionCount, Symmetry};
    use egui::Pos2;
    use std::sync::Arc;

    fn stroke(x: f32) -> StrokeRef {
        let symmetry = Symmetry::new(SectionCount::new(8).unwrap(), false);
        MutableStroke::new(Pos2::new(x, x), Brush::default(), symmetry).into_stroke_ref()
    }

    #[test]
    fn test_commit_moves_cursor_to_end() {
        let mut history = StrokeHistory::new();
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));

        assert_eq!(history.cursor(), 2);
        assert_eq!(history.visible().len(), 2);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_noops_at_bounds() {
        let mut history = StrokeHistory::new();
        assert!(!history.undo());
        assert_eq!(history.cursor(), 0);

        history.commit(stroke(1.0));
        assert!(!history.redo());
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_commit_after_undo_truncates() {
        let mut history = StrokeHistory::new();
        let (a, b, c, d) = (stroke(1.0), stroke(2.0), stroke(3.0), stroke(4.0));
        history.commit(a.clone());
        history.commit(b);
        history.commit(c);

        history.undo();
        history.undo();
        history.commit(d.clone());

        assert_eq!(history.cursor(), 2);
        assert_eq!(history.len(), 2);
        assert!(Arc::ptr_eq(&history.committed()[0], &a));
        assert!(Arc::ptr_eq(&history.committed()[1], &d));
        assert!(!history.redo());
    }

    #[test]
    fn test_clear_drops_redo() {
        let mut history = StrokeHistory::new();
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));
        history.undo();

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
        assert!(!history.redo());
    }
}
