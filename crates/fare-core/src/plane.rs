//! Plane coordinates and the Manhattan distance behind every
//! distance-derived surcharge.
//!
//! The schedule lives on an abstract reference plane, not on the globe:
//! coordinates are integer metres and distance is the component-wise sum of
//! absolute differences.  Both axes use the same unit and the same scale, so
//! the distance satisfies the triangle inequality — the search heuristic in
//! `fare-graph` relies on that.

/// A point on the schedule's reference plane, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanePoint {
    pub x: i64,
    pub y: i64,
}

impl PlanePoint {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance in metres: `|dx| + |dy|`.
    ///
    /// Saturates at `u64::MAX` instead of wrapping for pathological
    /// coordinate pairs near the integer limits.
    #[inline]
    pub fn manhattan_m(self, other: PlanePoint) -> u64 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }
}

impl std::fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
