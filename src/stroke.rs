use egui::{Color32, Pos2};
use std::sync::Arc;

use crate::error::ConfigurationError;
use crate::symmetry::Symmetry;

/// Color and line width used for a stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color32,
    pub thickness: f32,
}

impl Brush {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self { color, thickness }
    }

    pub(crate) fn validate(self) -> Result<Self, ConfigurationError> {
        if self.thickness.is_finite() && self.thickness > 0.0 {
            Ok(self)
        } else {
            Err(ConfigurationError::InvalidThickness(self.thickness))
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Color32::BLACK, 1.0)
    }
}

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    brush: Brush,
    symmetry: Symmetry,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(brush: Brush, symmetry: Symmetry, points: Vec<Pos2>) -> Self {
        debug_assert!(!points.is_empty(), "a stroke needs at least one point");
        Self {
            points,
            brush,
            symmetry,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn color(&self) -> Color32 {
        self.brush.color
    }

    pub fn thickness(&self) -> f32 {
        self.brush.thickness
    }

    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }
}

// Mutable stroke for the gesture in progress
#[derive(Debug, Clone)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    brush: Brush,
    symmetry: Symmetry,
}

impl MutableStroke {
    pub fn new(first_point: Pos2, brush: Brush, symmetry: Symmetry) -> Self {
        Self {
            points: vec![first_point],
            brush,
            symmetry,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// The two most recent points, once the stroke has a segment
    pub fn last_segment(&self) -> Option<(Pos2, Pos2)> {
        match self.points.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Freeze into an immutable history entry
    pub fn into_stroke_ref(self) -> StrokeRef {
        Arc::new(Stroke::new(self.brush, self.symmetry, self.points))
    }
}
