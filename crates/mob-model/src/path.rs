//! The path a node travels: ordered waypoints plus a scalar speed.

use std::fmt;

use mob_core::Coord;

/// One movement segment: the waypoints to pass through, in traversal
/// order, and the speed to travel them at.
///
/// Append-only — movement models push waypoints and never read them back.
/// Waypoints are `Coord` values, so a path holds independent copies of
/// whatever the model sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    speed: f64,
    waypoints: Vec<Coord>,
}

impl Path {
    /// An empty path travelled at `speed`.
    pub fn new(speed: f64) -> Self {
        Self { speed, waypoints: Vec::new() }
    }

    /// Append the next waypoint in traversal order.
    #[inline]
    pub fn add_waypoint(&mut self, c: Coord) {
        self.waypoints.push(c);
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn waypoints(&self) -> &[Coord] {
        &self.waypoints
    }

    #[inline]
    pub fn first(&self) -> Option<Coord> {
        self.waypoints.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.waypoints.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Total length of the path: the sum of all leg distances.
    ///
    /// Engines divide this by [`speed`](Self::speed) to get travel time.
    pub fn distance(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|leg| leg[0].distance(leg[1]))
            .sum()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path @{:.2}:", self.speed)?;
        for w in &self.waypoints {
            write!(f, " {w}")?;
        }
        Ok(())
    }
}
