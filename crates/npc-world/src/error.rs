//! Error types for npc-world.

use npc_core::{EntityId, SurfaceId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("surface {0} not found")]
    SurfaceNotFound(SurfaceId),
}

pub type WorldResult<T> = Result<T, WorldError>;
