//! Movement configuration.
//!
//! Typically loaded from a TOML/JSON file by the application crate (with
//! the `serde` feature enabled) and turned into a model prototype via
//! [`build_prototype`]. The prototype is then replicated once per
//! simulated node.

use std::sync::Arc;

use mob_core::World;
use tracing::debug;

use crate::speed::SharedSpeed;
use crate::{ModelResult, MovementModel, RandomWalk3D, RandomWaypoint3D, UniformSpeed};

/// Which mobility algorithm the nodes of a group use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelKind {
    RandomWalk3D,
    RandomWaypoint3D,
}

/// Parameters specific to [`RandomWalk3D`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// Minimum step length, metres.
    pub min_distance: f64,
    /// Maximum step length, metres.
    pub max_distance: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            min_distance: RandomWalk3D::DEFAULT_MIN_DISTANCE,
            max_distance: RandomWalk3D::DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Top-level movement configuration for one node group.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementConfig {
    /// World bounds: trajectories stay inside `[0, max_*]` per axis.
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,

    /// Master RNG seed. The same seed always produces identical
    /// trajectories for the same node IDs.
    pub seed: u64,

    /// Which algorithm to use.
    pub model: ModelKind,

    /// Travel speed range `[min_speed, max_speed)`. Equal values (the
    /// default, 1.0) mean constant speed.
    #[cfg_attr(feature = "serde", serde(default = "default_speed"))]
    pub min_speed: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_speed"))]
    pub max_speed: f64,

    /// Walk-model parameters; ignored by other models.
    #[cfg_attr(feature = "serde", serde(default))]
    pub walk: WalkConfig,
}

fn default_speed() -> f64 {
    1.0
}

impl MovementConfig {
    fn speed_model(&self) -> ModelResult<SharedSpeed> {
        // min == max degenerates to a constant draw, so one type covers both.
        Ok(Arc::new(UniformSpeed::new(self.min_speed, self.max_speed)?))
    }
}

/// Build the prototype instance for `cfg`.
///
/// This is the one place model selection happens; everything downstream
/// works through `dyn MovementModel`. Validation failures (bad world
/// bounds, inverted distance or speed ranges) surface here, before any
/// node is replicated.
pub fn build_prototype(cfg: &MovementConfig) -> ModelResult<Box<dyn MovementModel>> {
    let world = World::new(cfg.max_x, cfg.max_y, cfg.max_z)?;
    let speed = cfg.speed_model()?;
    debug!(model = ?cfg.model, seed = cfg.seed, "building movement prototype");

    Ok(match cfg.model {
        ModelKind::RandomWalk3D => Box::new(
            RandomWalk3D::new(world, cfg.seed)
                .with_distance_range(cfg.walk.min_distance, cfg.walk.max_distance)?
                .with_speed(speed),
        ),
        ModelKind::RandomWaypoint3D => {
            Box::new(RandomWaypoint3D::new(world, cfg.seed).with_speed(speed))
        }
    })
}
