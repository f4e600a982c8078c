//! Simulation-level errors.

use npc_behavior::BehaviorError;
use npc_core::{AgentId, EntityId};
use npc_nav::NavError;
use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulation config: {0}")]
    Config(String),

    #[error(transparent)]
    Nav(#[from] NavError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    /// A registry entry points at an entity the world no longer has.
    #[error("registered entity {0} is gone from the world")]
    DanglingEntity(EntityId),

    #[error("no controller for agent {0}")]
    UnknownAgent(AgentId),
}
