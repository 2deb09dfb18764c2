//! Random-waypoint model: zig-zag legs between uniformly sampled points.

use std::sync::Arc;

use mob_core::{Coord, NodeId, NodeRng, World};

use crate::model::{NOT_PLACED, NOT_REPLICATED};
use crate::speed::{ConstantSpeed, SharedSpeed, SpeedModel};
use crate::{MovementModel, Path};

/// How many waypoints there are per path.
const PATH_LENGTH: usize = 1;

/// Random-waypoint movement: each path goes straight from the current
/// position to a fresh point drawn uniformly over the whole world box.
///
/// Unlike the walk model there is no rejection step — the sampled region
/// already equals the legal region.
pub struct RandomWaypoint3D {
    world: World,
    seed: u64,
    speed: SharedSpeed,
    rng: Option<NodeRng>,
    last_waypoint: Option<Coord>,
}

impl RandomWaypoint3D {
    /// Prototype with unit speed.
    pub fn new(world: World, seed: u64) -> Self {
        Self {
            world,
            seed,
            speed: Arc::new(ConstantSpeed(1.0)),
            rng: None,
            last_waypoint: None,
        }
    }

    /// Inject a speed-generation strategy (default: constant 1.0).
    pub fn with_speed(mut self, speed: SharedSpeed) -> Self {
        self.speed = speed;
        self
    }
}

impl MovementModel for RandomWaypoint3D {
    fn initial_location(&mut self) -> Coord {
        let rng = self.rng.as_mut().expect(NOT_REPLICATED);
        let c = self.world.random_coord(rng);
        self.last_waypoint = Some(c);
        c
    }

    fn path(&mut self) -> Path {
        let rng = self.rng.as_mut().expect(NOT_REPLICATED);
        let start = self.last_waypoint.expect(NOT_PLACED);

        let mut path = Path::new(self.speed.generate(rng));
        path.add_waypoint(start);

        let mut end = start;
        for _ in 0..PATH_LENGTH {
            end = self.world.random_coord(rng);
            path.add_waypoint(end);
        }

        self.last_waypoint = Some(end);
        path
    }

    fn replicate(&self, node: NodeId) -> Box<dyn MovementModel> {
        Box::new(RandomWaypoint3D {
            world: self.world,
            seed: self.seed,
            speed: Arc::clone(&self.speed),
            rng: Some(NodeRng::new(self.seed, node)),
            last_waypoint: None,
        })
    }
}
