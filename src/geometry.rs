use egui::Pos2;

/// A point expressed as distance and angle around a pivot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub radius: f32,
    /// Radians, as returned by `atan2`
    pub angle: f32,
}

impl Polar {
    /// Convert a canvas point into polar form relative to `pivot`
    pub fn from_point(point: Pos2, pivot: Pos2) -> Self {
        let dx = point.x - pivot.x;
        let dy = point.y - pivot.y;
        Self {
            radius: dx.hypot(dy),
            angle: dy.atan2(dx),
        }
    }

    pub fn rotated(self, radians: f32) -> Self {
        Self {
            radius: self.radius,
            angle: self.angle + radians,
        }
    }

    /// Convert back into canvas coordinates around `pivot`
    pub fn to_point(self, pivot: Pos2) -> Pos2 {
        Pos2::new(
            pivot.x + self.radius * self.angle.cos(),
            pivot.y + self.radius * self.angle.sin(),
        )
    }
}

/// Swap the x and y components, reflecting across the line y = x of the frame
pub fn swap_axes(point: Pos2) -> Pos2 {
    Pos2::new(point.y, point.x)
}
