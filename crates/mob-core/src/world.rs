//! The bounded simulation area.

use crate::{Coord, MobError, MobResult, NodeRng};

/// The axis-aligned box `[0, max_x] × [0, max_y] × [0, max_z]` every
/// trajectory must stay inside.
///
/// Boundaries are fixed at construction and the struct is `Copy`, so a
/// replica duplicating its prototype's `World` duplicates it by value —
/// there is no shared mutable boundary state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    max_x: f64,
    max_y: f64,
    max_z: f64,
}

impl World {
    /// Build a world from its upper bounds.
    ///
    /// All three bounds must be positive and finite; anything else is a
    /// configuration error.
    pub fn new(max_x: f64, max_y: f64, max_z: f64) -> MobResult<World> {
        for (axis, max) in [("max_x", max_x), ("max_y", max_y), ("max_z", max_z)] {
            if !max.is_finite() || max <= 0.0 {
                return Err(MobError::Config(format!(
                    "world bound {axis} must be positive and finite, got {max}"
                )));
            }
        }
        Ok(World { max_x, max_y, max_z })
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[inline]
    pub fn max_z(&self) -> f64 {
        self.max_z
    }

    /// Strict interior test: `0 < c < max` on every axis. Points on the
    /// boundary itself are outside — the rejection sampler in the walk
    /// model redraws them.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x > 0.0 && c.x < self.max_x
            && c.y > 0.0 && c.y < self.max_y
            && c.z > 0.0 && c.z < self.max_z
    }

    /// Sample a point uniformly over the closed box, independently per axis.
    ///
    /// Used for initial placements and random-waypoint legs; the sampled
    /// region already equals the legal region, so no rejection is needed.
    pub fn random_coord(&self, rng: &mut NodeRng) -> Coord {
        Coord::new(
            rng.next_f64() * self.max_x,
            rng.next_f64() * self.max_y,
            rng.next_f64() * self.max_z,
        )
    }

    /// Box volume, exposed for degenerate-configuration diagnostics.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.max_x * self.max_y * self.max_z
    }
}
