//! `npc-sim` — the tick-driven simulation loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`sim`]      | `Sim` — the run loop and per-tick orchestration       |
//! | [`builder`]  | `SimBuilder` — declarative world and agent setup      |
//! | [`config`]   | `SimConfig` — tick count, seed, step size, snapshots  |
//! | [`observer`] | `SimObserver` hooks, `AgentSample`, `NoopObserver`    |
//! | [`error`]    | `SimError`, `SimResult<T>`                            |
//!
//! The loop is deliberately single-threaded: agents tick one at a time in
//! ascending ID order, and each sees the world as left by the agents before
//! it in the same tick.  Runs are reproducible for a fixed declaration
//! sequence and seed.

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{AgentSample, NoopObserver, SimObserver};
pub use sim::Sim;
