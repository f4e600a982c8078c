//! `npc-core` — foundational types for the npc behavior framework.
//!
//! This crate is a dependency of every other `npc-*` crate.  It intentionally
//! has no `npc-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `EntityId`, `NavPointId`, `SurfaceId`       |
//! | [`position`] | `Position` — ground-plane coordinates and distance     |
//! | [`tick`]     | `Tick` — monotonic simulation time counter             |
//! | [`color`]    | `Color` — RGB triple applied by presentation code      |
//! | [`rng`]      | `AgentRng` — deterministic per-agent randomness        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod color;
pub mod ids;
pub mod position;
pub mod rng;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use ids::{AgentId, EntityId, NavPointId, SurfaceId};
pub use position::Position;
pub use rng::AgentRng;
pub use tick::Tick;
