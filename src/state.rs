use crate::stroke::MutableStroke;

/// Lifecycle of a single pointer gesture
#[derive(Debug, Default, Clone)]
pub enum DrawingState {
    #[default]
    Idle,
    /// A pointer is down and points are being collected
    Drawing { stroke: MutableStroke },
}

impl DrawingState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn live_stroke(&self) -> Option<&MutableStroke> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }

    pub fn live_stroke_mut(&mut self) -> Option<&mut MutableStroke> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }

    /// Return to idle, handing back the stroke that was open
    pub fn finish(&mut self) -> Option<MutableStroke> {
        match std::mem::take(self) {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }
}
