//! `npc-behavior` — the finite-state-machine behavior core.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`state`]      | `BehaviorState` tagged union, `StateKind`, `Transition`      |
//! | [`controller`] | `AgentController` — identity, nav cycle, tick driver         |
//! | [`config`]     | `AgentConfig` — validated per-agent configuration            |
//! | [`ctx`]        | `TickCtx` — per-tick mutable collaborator bundle             |
//! | [`registry`]   | `SiblingRegistry` — shared, append-only agent registry       |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! # Design notes
//!
//! Each simulation tick the controller runs two phases in a fixed order:
//!
//! 1. **Transition check**: the active state inspects the world and may name
//!    a successor.  The swap runs the outgoing state's `on_exit` to
//!    completion before the incoming state's `on_enter` begins.
//! 2. **Act**: the state active *after* the check acts.  A single tick never
//!    runs both the old and the new state's act.
//!
//! States are a closed tagged union rather than trait objects so the
//! transition table is exhaustiveness-checked at compile time.  A state
//! value lives for exactly one activation: every re-entry constructs a
//! fresh variant with reset state-local counters.

pub mod config;
pub mod controller;
pub mod ctx;
pub mod error;
pub mod registry;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::AgentConfig;
pub use controller::AgentController;
pub use ctx::TickCtx;
pub use error::{BehaviorError, BehaviorResult};
pub use registry::SiblingRegistry;
pub use state::{BehaviorState, StateKind, Transition};
