//! `mob-model` — synthetic movement models for simulated mobile nodes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`model`]    | `MovementModel` trait + `SwitchableMovement` capability    |
//! | [`path`]     | `Path` — ordered waypoints plus a travel speed             |
//! | [`speed`]    | `SpeedModel` trait, `UniformSpeed`, `ConstantSpeed`        |
//! | [`walk`]     | `RandomWalk3D` — bounded walk via rejection sampling       |
//! | [`waypoint`] | `RandomWaypoint3D` — uniform single-leg waypoint model     |
//! | [`config`]   | `MovementConfig` + `build_prototype` dispatch              |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                             |
//!
//! # Replication protocol
//!
//! A movement model goes through two stages:
//!
//! 1. A **prototype** is built once from configuration. It holds the
//!    world bounds, the distance/speed parameters, and the run's global
//!    seed — but no RNG and no position. Querying a prototype panics.
//! 2. [`MovementModel::replicate`] is called once per simulated node.
//!    Each replica copies the static configuration by value and owns a
//!    freshly seeded [`mob_core::NodeRng`] plus its own "last waypoint".
//!    Two replicas never observe each other's draws or mutations.
//!
//! The driving engine then calls [`MovementModel::initial_location`] once
//! and [`MovementModel::path`] repeatedly. Paths chain: the first waypoint
//! of segment *n + 1* always equals the last waypoint of segment *n*.
//!
//! # Thread model
//!
//! Replicas are `Send` but not `Sync`: one node's trajectory is inherently
//! sequential (every call reads and rewrites the last waypoint), so a
//! multi-threaded engine gives each worker ownership of its replicas
//! instead of sharing them.

pub mod config;
pub mod error;
pub mod model;
pub mod path;
pub mod speed;
pub mod walk;
pub mod waypoint;

#[cfg(test)]
mod tests;

pub use config::{ModelKind, MovementConfig, WalkConfig, build_prototype};
pub use error::{ModelError, ModelResult};
pub use model::{MovementModel, SwitchableMovement};
pub use path::Path;
pub use speed::{ConstantSpeed, SharedSpeed, SpeedModel, UniformSpeed};
pub use walk::RandomWalk3D;
pub use waypoint::RandomWaypoint3D;
