//! The 3D coordinate value type.
//!
//! `Coord` uses `f64` throughout: mobility models accumulate many small
//! translations over a long run, and single precision drifts visibly after
//! a few hundred thousand path legs.
//!
//! # Equality contract
//!
//! Equality is componentwise IEEE `==` with **no epsilon tolerance**.
//! Two coordinates that are mathematically equal but differ in the last
//! bit compare unequal. Downstream ordering and deduplication logic relies
//! on this exact-match behavior, so it must not be "fixed" with a
//! tolerance comparison.

use std::cmp::Ordering;
use std::fmt;

/// A point in 3D Euclidean space.
///
/// Plain `Copy` value — handing a `Coord` to a path or a caller always
/// copies it, so later mutation of a model's internal waypoint never
/// retroactively changes a previously emitted value.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point in the z = 0 plane.
    #[inline]
    pub fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Overwrite all three components in place.
    #[inline]
    pub fn set_location(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Shift the point by `(dx, dy, dz)`.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Euclidean distance to `other`.
    ///
    /// Always ≥ 0 for finite inputs; NaN components propagate.
    pub fn distance(self, other: Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Total order, lexicographic by (z, y, x) — z dominates, then y,
    /// then x. The coordinate with the smaller z comes first.
    ///
    /// Built on [`f64::total_cmp`], so every pair of coordinates is
    /// ordered, including NaN components (which sort per IEEE 754
    /// `totalOrder`).
    #[inline]
    pub fn total_cmp(&self, other: &Coord) -> Ordering {
        self.z
            .total_cmp(&other.z)
            .then(self.y.total_cmp(&other.y))
            .then(self.x.total_cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    /// Fixed two-decimal rendering, for diagnostics only (never parsed back).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2},{:.2},{:.2})", self.x, self.y, self.z)
    }
}
