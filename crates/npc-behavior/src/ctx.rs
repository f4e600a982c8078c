//! Mutable collaborator bundle passed to every controller operation.

use npc_core::AgentRng;
use npc_nav::NavMotor;

use crate::SiblingRegistry;

/// Everything one agent may touch during its tick.
///
/// The simulation builds a fresh `TickCtx` per agent per tick from pieces
/// it owns: the world, the agent's own motor, the shared sibling registry,
/// and the agent's deterministic RNG.  Execution is single-threaded and
/// cooperative, so handing out mutable borrows here is safe by
/// construction — only one agent's tick is ever in flight.
pub struct TickCtx<'a, W> {
    /// The world: queries, spawning, presentation.
    pub world: &'a mut W,

    /// This agent's navigation motor.
    pub motor: &'a mut NavMotor,

    /// Shared registry of all spawned agents (append-only).
    pub registry: &'a mut SiblingRegistry,

    /// This agent's deterministic RNG.
    pub rng: &'a mut AgentRng,
}

impl<'a, W> TickCtx<'a, W> {
    pub fn new(
        world:    &'a mut W,
        motor:    &'a mut NavMotor,
        registry: &'a mut SiblingRegistry,
        rng:      &'a mut AgentRng,
    ) -> Self {
        Self { world, motor, registry, rng }
    }
}
