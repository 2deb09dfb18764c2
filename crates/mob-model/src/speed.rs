//! Travel-speed generation.
//!
//! Speed is a pluggable strategy injected into each movement model rather
//! than baked into the sampling algorithms. Implementations are stateless
//! (`&self`) and draw from the *node's* RNG, so a path's speed comes out
//! of the same deterministic stream as its waypoints.

use std::sync::Arc;

use mob_core::NodeRng;

use crate::{ModelError, ModelResult};

/// Strategy producing one travel speed per generated path.
///
/// Held behind [`Arc`] and shared read-only across all replicas of a
/// prototype — only the RNG passed in per call is mutable.
pub trait SpeedModel: Send + Sync {
    fn generate(&self, rng: &mut NodeRng) -> f64;
}

/// Shorthand for the shared handle the models store.
pub type SharedSpeed = Arc<dyn SpeedModel>;

/// Uniform speed in `[min, max)`.
#[derive(Clone, Copy, Debug)]
pub struct UniformSpeed {
    min: f64,
    max: f64,
}

impl UniformSpeed {
    pub fn new(min: f64, max: f64) -> ModelResult<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < min {
            return Err(ModelError::Config(format!(
                "speed range [{min}, {max}) must satisfy 0 <= min <= max, both finite"
            )));
        }
        Ok(Self { min, max })
    }
}

impl SpeedModel for UniformSpeed {
    fn generate(&self, rng: &mut NodeRng) -> f64 {
        self.min + rng.next_f64() * (self.max - self.min)
    }
}

/// Fixed speed for every path. The default when no range is configured.
#[derive(Clone, Copy, Debug)]
pub struct ConstantSpeed(pub f64);

impl SpeedModel for ConstantSpeed {
    fn generate(&self, _rng: &mut NodeRng) -> f64 {
        self.0
    }
}
