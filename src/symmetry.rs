use std::num::NonZeroU32;

use egui::{Color32, Pos2};

use crate::error::ConfigurationError;
use crate::geometry::{Polar, swap_axes};
use crate::stroke::{Brush, Stroke};

/// Upper bound on sections; anything above this is rejected rather than clamped
pub const MAX_SECTIONS: u32 = 1024;

/// Number of angular copies of every segment, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCount(NonZeroU32);

impl SectionCount {
    pub fn new(count: u32) -> Result<Self, ConfigurationError> {
        if count > MAX_SECTIONS {
            return Err(ConfigurationError::TooManySections(f64::from(count)));
        }
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(ConfigurationError::TooFewSections(0.0))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// Accepts the raw number typed into the settings panel
impl TryFrom<f64> for SectionCount {
    type Error = ConfigurationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ConfigurationError::NonFiniteSections(value));
        }
        if value.fract() != 0.0 {
            return Err(ConfigurationError::FractionalSections(value));
        }
        if value < 1.0 {
            return Err(ConfigurationError::TooFewSections(value));
        }
        if value > f64::from(MAX_SECTIONS) {
            return Err(ConfigurationError::TooManySections(value));
        }
        Self::new(value as u32)
    }
}

/// Symmetry configuration captured by a stroke when it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symmetry {
    pub sections: SectionCount,
    pub mirror: bool,
}

impl Symmetry {
    pub fn new(sections: SectionCount, mirror: bool) -> Self {
        Self { sections, mirror }
    }
}

/// One line to be stroked onto a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSegment {
    pub from: Pos2,
    pub to: Pos2,
    pub color: Color32,
    pub thickness: f32,
}

/// Rotation of section `index` in radians.
///
/// Sections are numbered `1..=N`, so the last one is a full turn and lands on
/// top of the drawn segment.
pub fn section_rotation(index: u32, sections: SectionCount) -> f32 {
    let step = 360.0 / sections.get() as f32;
    (step * index as f32).to_radians()
}

/// Replicate the segment `p0 -> p1` around `pivot`.
///
/// Each endpoint is rotated on its own radius, so the copies keep the exact
/// shape of the drawn segment even close to the pivot. With mirroring on, every
/// rotated copy is followed by its axis-swapped twin.
pub fn expand_segment(
    p0: Pos2,
    p1: Pos2,
    symmetry: Symmetry,
    pivot: Pos2,
    brush: Brush,
) -> Vec<RenderSegment> {
    let per_section = if symmetry.mirror { 2 } else { 1 };
    let mut segments = Vec::with_capacity(symmetry.sections.get() as usize * per_section);
    expand_segment_into(&mut segments, p0, p1, symmetry, pivot, brush);
    segments
}

fn expand_segment_into(
    out: &mut Vec<RenderSegment>,
    p0: Pos2,
    p1: Pos2,
    symmetry: Symmetry,
    pivot: Pos2,
    brush: Brush,
) {
    let start = Polar::from_point(p0, pivot);
    let end = Polar::from_point(p1, pivot);

    for index in 1..=symmetry.sections.get() {
        let delta = section_rotation(index, symmetry.sections);
        let from = start.rotated(delta).to_point(pivot);
        let to = end.rotated(delta).to_point(pivot);

        out.push(RenderSegment {
            from,
            to,
            color: brush.color,
            thickness: brush.thickness,
        });

        if symmetry.mirror {
            out.push(RenderSegment {
                from: swap_axes(from),
                to: swap_axes(to),
                color: brush.color,
                thickness: brush.thickness,
            });
        }
    }
}

/// Expand every consecutive point pair of a stroke with the stroke's own settings
pub fn replay_stroke(stroke: &Stroke, pivot: Pos2) -> Vec<RenderSegment> {
    let mut segments = Vec::new();
    for pair in stroke.points().windows(2) {
        expand_segment_into(
            &mut segments,
            pair[0],
            pair[1],
            stroke.symmetry(),
            pivot,
            stroke.brush(),
        );
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brush() -> Brush {
        Brush::new(Color32::BLACK, 1.0)
    }

    fn close(a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    fn symmetry(sections: u32, mirror: bool) -> Symmetry {
        Symmetry::new(SectionCount::new(sections).unwrap(), mirror)
    }

    #[test]
    fn test_section_count_rejects_invalid_numbers() {
        assert_eq!(
            SectionCount::try_from(0.0),
            Err(ConfigurationError::TooFewSections(0.0))
        );
        assert_eq!(
            SectionCount::try_from(-3.0),
            Err(ConfigurationError::TooFewSections(-3.0))
        );
        assert_eq!(
            SectionCount::try_from(2.5),
            Err(ConfigurationError::FractionalSections(2.5))
        );
        assert!(matches!(
            SectionCount::try_from(f64::NAN),
            Err(ConfigurationError::NonFiniteSections(_))
        ));
        assert!(matches!(
            SectionCount::try_from(f64::INFINITY),
            Err(ConfigurationError::NonFiniteSections(_))
        ));
        assert!(matches!(
            SectionCount::try_from(4096.0),
            Err(ConfigurationError::TooManySections(_))
        ));
        assert_eq!(SectionCount::try_from(16.0).unwrap().get(), 16);
    }

    #[test]
    fn test_section_rotation_steps() {
        let four = SectionCount::new(4).unwrap();
        assert!((section_rotation(1, four) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((section_rotation(4, four) - std::f32::consts::TAU).abs() < 1e-5);
    }

    #[test]
    fn test_first_section_is_quarter_turn() {
        let pivot = Pos2::new(250.0, 250.0);
        let segments = expand_segment(
            Pos2::new(260.0, 250.0),
            Pos2::new(260.0, 200.0),
            symmetry(4, false),
            pivot,
            brush(),
        );

        assert!(close(segments[0].from, Pos2::new(250.0, 260.0)));
        assert!(close(segments[0].to, Pos2::new(300.0, 260.0)));
    }

    #[test]
    fn test_mirror_follows_each_section() {
        let pivot = Pos2::new(250.0, 250.0);
        let segments = expand_segment(
            Pos2::new(260.0, 250.0),
            Pos2::new(260.0, 200.0),
            symmetry(4, true),
            pivot,
            brush(),
        );

        for pair in segments.chunks(2) {
            assert!(close(pair[1].from, swap_axes(pair[0].from)));
            assert!(close(pair[1].to, swap_axes(pair[0].to)));
        }
    }

    #[test]
    fn test_single_section_reproduces_segment() {
        let pivot = Pos2::new(100.0, 100.0);
        let p0 = Pos2::new(120.0, 90.0);
        let p1 = Pos2::new(130.0, 140.0);
        let segments = expand_segment(p0, p1, symmetry(1, false), pivot, brush());

        assert_eq!(segments.len(), 1);
        assert!(close(segments[0].from, p0));
        assert!(close(segments[0].to, p1));
    }

    #[test]
    fn test_segments_carry_brush() {
        let red = Brush::new(Color32::RED, 3.0);
        let segments = expand_segment(
            Pos2::new(10.0, 10.0),
            Pos2::new(20.0, 20.0),
            symmetry(3, true),
            Pos2::new(50.0, 50.0),
            red,
        );
        assert!(
            segments
                .iter()
                .all(|s| s.color == Color32::RED && s.thickness == 3.0)
        );
    }
}
