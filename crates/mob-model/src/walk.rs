//! Bounded 3D random walk.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::sync::Arc;

use mob_core::{Coord, NodeId, NodeRng, World};
use tracing::warn;

use crate::model::{NOT_PLACED, NOT_REPLICATED};
use crate::speed::{ConstantSpeed, SharedSpeed, SpeedModel};
use crate::{ModelError, ModelResult, MovementModel, Path, SwitchableMovement};

/// Candidate-draw count at which a single warning is emitted per `path()`
/// call. The loop itself never gives up (see module notes on `path`).
const STALL_WARN_DRAWS: u64 = 100_000;

/// Random walk with uniformly drawn step direction and length, confined
/// to the world box by rejection sampling.
///
/// Each path has exactly two waypoints: the current position and one
/// accepted step endpoint at most `max_distance` away.
pub struct RandomWalk3D {
    world: World,
    min_distance: f64,
    max_distance: f64,
    seed: u64,
    speed: SharedSpeed,
    /// `None` on the prototype; seeded per node by `replicate`.
    rng: Option<NodeRng>,
    /// `None` until `initial_location` (or `set_location`) has run.
    last_waypoint: Option<Coord>,
    /// Cumulative candidate draws across all `path()` calls, accepted and
    /// rejected. Diagnostic only.
    draws: u64,
}

impl RandomWalk3D {
    pub const DEFAULT_MIN_DISTANCE: f64 = 0.0;
    pub const DEFAULT_MAX_DISTANCE: f64 = 50.0;

    /// Prototype with the default step-length range and unit speed.
    pub fn new(world: World, seed: u64) -> Self {
        Self {
            world,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            max_distance: Self::DEFAULT_MAX_DISTANCE,
            seed,
            speed: Arc::new(ConstantSpeed(1.0)),
            rng: None,
            last_waypoint: None,
            draws: 0,
        }
    }

    /// Override the step-length range `[min, max)`.
    pub fn with_distance_range(mut self, min: f64, max: f64) -> ModelResult<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < min {
            return Err(ModelError::Config(format!(
                "walk distance range [{min}, {max}) must satisfy 0 <= min <= max, both finite"
            )));
        }
        self.min_distance = min;
        self.max_distance = max;
        Ok(self)
    }

    /// Inject a speed-generation strategy (default: constant 1.0).
    pub fn with_speed(mut self, speed: SharedSpeed) -> Self {
        self.speed = speed;
        self
    }

    #[inline]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Like [`MovementModel::replicate`], but concretely typed so the
    /// caller keeps the [`SwitchableMovement`] capability.
    pub fn replica(&self, node: NodeId) -> RandomWalk3D {
        RandomWalk3D {
            world: self.world,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            seed: self.seed,
            speed: Arc::clone(&self.speed),
            rng: Some(NodeRng::new(self.seed, node)),
            last_waypoint: None,
            draws: 0,
        }
    }

    /// Total candidate draws this replica has made, rejected ones
    /// included. A value far above the number of `path()` calls means the
    /// configured distance range barely fits the world box.
    #[inline]
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl MovementModel for RandomWalk3D {
    fn initial_location(&mut self) -> Coord {
        let rng = self.rng.as_mut().expect(NOT_REPLICATED);
        let c = self.world.random_coord(rng);
        self.last_waypoint = Some(c);
        c
    }

    /// One step of the walk.
    ///
    /// Draws an azimuth in `[0, 2π)`, an elevation in `[−π/2, π/2]`, and a
    /// step length in `[min_distance, max_distance)`, then rejects the
    /// resulting endpoint unless it lies strictly inside the world box.
    /// All three values are redrawn together on rejection.
    ///
    /// The retry loop is unbounded by contract. It terminates with
    /// probability 1 whenever the box has usable interior volume within
    /// step range of the current position; a world degenerate relative to
    /// the distance range can spin here forever, which is surfaced by a
    /// warning after `STALL_WARN_DRAWS` rejected candidates rather than
    /// by a retry cap.
    fn path(&mut self) -> Path {
        let rng = self.rng.as_mut().expect(NOT_REPLICATED);
        let start = self.last_waypoint.expect(NOT_PLACED);

        let mut path = Path::new(self.speed.generate(rng));
        path.add_waypoint(start);

        let mut draws = 0u64;
        let next = loop {
            draws += 1;
            if draws == STALL_WARN_DRAWS {
                warn!(
                    draws,
                    min_distance = self.min_distance,
                    max_distance = self.max_distance,
                    world_volume = self.world.volume(),
                    "random walk rejection sampling is stalling; \
                     distance range may not fit inside the world"
                );
            }

            let azimuth = rng.next_f64() * TAU;
            let elevation = rng.next_f64() * PI - FRAC_PI_2;
            let distance =
                self.min_distance + rng.next_f64() * (self.max_distance - self.min_distance);

            let vertical = distance * elevation.sin();
            let horizontal = distance * elevation.cos();
            let candidate = Coord::new(
                start.x + horizontal * azimuth.cos(),
                start.y + horizontal * azimuth.sin(),
                start.z + vertical,
            );

            if self.world.contains(candidate) {
                break candidate;
            }
        };
        self.draws += draws;

        path.add_waypoint(next);
        self.last_waypoint = Some(next);
        path
    }

    fn replicate(&self, node: NodeId) -> Box<dyn MovementModel> {
        Box::new(self.replica(node))
    }
}

impl SwitchableMovement for RandomWalk3D {
    fn last_location(&self) -> Option<Coord> {
        self.last_waypoint
    }

    fn set_location(&mut self, c: Coord) {
        self.last_waypoint = Some(c);
    }
}
