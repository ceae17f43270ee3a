//! Planar coordinate type.
//!
//! Positions live in a flat integer grid shared by professionals and query
//! points.  There is no projection: distance is plain Euclidean distance in
//! grid units.

/// A point in the shared planar space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance `sqrt(dx² + dy²)` in grid units.
    ///
    /// Deltas are widened to `f64` before squaring so extreme `i32`
    /// coordinates cannot overflow.
    pub fn distance(self, other: Coord) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// `true` if `self` lies within `radius` of `center` (boundary inclusive).
    #[inline]
    pub fn within(self, center: Coord, radius: f64) -> bool {
        self.distance(center) <= radius
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
