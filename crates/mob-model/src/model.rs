//! The `MovementModel` trait — the contract every mobility algorithm
//! implements.

use mob_core::{Coord, NodeId};

use crate::Path;

/// Pluggable mobility algorithm for one simulated node.
///
/// # Contract
///
/// - [`replicate`](Self::replicate) is called once per simulated node on a
///   configuration-built prototype; the replica owns an independent RNG
///   stream and its own "last waypoint", while static parameters (world
///   bounds, distance and speed settings) are shared by value or behind
///   read-only handles.
/// - [`initial_location`](Self::initial_location) is called once per
///   replica, before the first [`path`](Self::path). It records the
///   returned coordinate as the replica's last waypoint.
/// - [`path`](Self::path) returns the next segment. Its first waypoint is
///   always a copy of the current last waypoint, so consecutive segments
///   chain seamlessly; its final waypoint becomes the new last waypoint.
///
/// # Panics
///
/// Querying a prototype (an instance that was never replicated), or
/// calling `path` before `initial_location`, is a contract violation and
/// panics. Implementations must not paper over it with a degraded value.
pub trait MovementModel: Send {
    /// Random initial placement inside the world. Records the result as
    /// the last waypoint before returning it.
    fn initial_location(&mut self) -> Coord;

    /// The next path segment, starting at the last waypoint and ending at
    /// a newly sampled one.
    fn path(&mut self) -> Path;

    /// Independent per-node instance sharing this prototype's static
    /// configuration.
    fn replicate(&self, node: NodeId) -> Box<dyn MovementModel>;

    /// Whether the model can be queried for more paths right now.
    /// Models with no extra state requirements are always ready.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Panic message for queries on a prototype that was never replicated.
pub(crate) const NOT_REPLICATED: &str =
    "movement model not initialized: query a replica, not the prototype";

/// Panic message for `path()` before `initial_location()`.
pub(crate) const NOT_PLACED: &str =
    "path() called before initial_location()";

/// Capability for models whose current position can be read and forced
/// from outside, so an engine can hand a node over from one model to
/// another mid-run.
pub trait SwitchableMovement {
    /// The most recently emitted waypoint, if the model has been placed.
    fn last_location(&self) -> Option<Coord>;

    /// Force the current position; the next path will start here.
    fn set_location(&mut self, c: Coord);
}
