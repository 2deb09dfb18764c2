//! `mob-core` — foundational types for the `mob3d` mobility library.
//!
//! This crate is a dependency of every other `mob-*` crate. It intentionally
//! has no `mob-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`coord`]   | `Coord` — 3D point with distance and (z,y,x) order  |
//! | [`ids`]     | `NodeId` — typed index of a simulated node          |
//! | [`rng`]     | `NodeRng` — per-node deterministic RNG              |
//! | [`world`]   | `World` — bounded simulation box                    |
//! | [`error`]   | `MobError`, `MobResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use error::{MobError, MobResult};
pub use ids::NodeId;
pub use rng::NodeRng;
pub use world::World;
