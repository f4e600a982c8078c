//! Error types for npc-behavior.
//!
//! Everything here is recoverable: the controller handles each case locally
//! by falling back to a safe state (Wander for missing navigation, Patrol
//! for a lost chase target).  Nothing propagates out of the tick loop.

use npc_core::EntityId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// No navigation points were discoverable at initialization.
    /// Recovered by starting in Wander instead of Patrol.
    #[error("no navigation points discoverable at initialization")]
    EmptyNavigationSet,

    /// A destination was requested from an empty nav point sequence.
    /// Recovered by falling back to Wander.
    #[error("navigation point sequence is empty")]
    NoNavigationTarget,

    /// The recorded chase target has despawned.
    /// Recovered by returning to Patrol.
    #[error("chase target {0} is no longer resolvable")]
    TargetLost(EntityId),

    /// Invalid configuration, rejected at construction time — never
    /// discovered mid-tick.
    #[error("agent configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
