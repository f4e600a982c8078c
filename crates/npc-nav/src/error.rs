//! Error types for npc-nav.

use npc_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("no motor registered for agent {0}")]
    UnknownAgent(AgentId),
}

pub type NavResult<T> = Result<T, NavError>;
