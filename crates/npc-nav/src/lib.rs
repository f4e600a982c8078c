//! `npc-nav` — destination-driven movement for agents.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`motor`] | `NavMotor` — one agent's position/destination/speed  |
//! | [`store`] | `MotorStore` — all motors, indexed by `AgentId`      |
//! | [`error`] | `NavError`, `NavResult<T>`                           |
//!
//! # Design notes
//!
//! The behavior core never moves anything itself: it sets a destination and
//! a travel speed, then polls [`NavMotor::has_arrived`] each tick.  The sim
//! loop calls [`MotorStore::advance_all`] once per tick to integrate
//! positions.  There is no cancellation or timeout — a destination stays
//! set until it is reached or replaced.

pub mod error;
pub mod motor;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{NavError, NavResult};
pub use motor::NavMotor;
pub use store::MotorStore;
