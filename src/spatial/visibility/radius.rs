use serde::{Deserialize, Serialize};

/// Shape of a view radius around the origin.
///
/// All three shapes contain their on-axis points up to `radius`, so the
/// shadowcaster explores them completely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadiusShape {
    /// Euclidean: `dx² + dy² <= radius²`.
    #[default]
    Circle,
    /// Chebyshev: `max(|dx|, |dy|) <= radius`.
    Square,
    /// Manhattan: `|dx| + |dy| <= radius`.
    Diamond,
}

impl RadiusShape {
    /// True if the offset lies beyond `radius` for this shape.
    #[inline]
    pub fn is_outside(self, dx: i32, dy: i32, radius: i32) -> bool {
        let (ax, ay) = (i64::from(dx).abs(), i64::from(dy).abs());
        let r = i64::from(radius);
        match self {
            RadiusShape::Circle => ax * ax + ay * ay > r * r,
            RadiusShape::Square => ax.max(ay) > r,
            RadiusShape::Diamond => ax + ay > r,
        }
    }

    /// Predicate form for [`compute_visibility`](super::compute_visibility).
    pub fn outside_predicate(self, radius: i32) -> impl Fn(i32, i32) -> bool {
        move |dx, dy| self.is_outside(dx, dy, radius)
    }
}
