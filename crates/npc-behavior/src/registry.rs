//! The shared registry of all spawned agents.
//!
//! One registry instance is owned by the orchestrating simulation and
//! injected into every controller through [`TickCtx`][crate::TickCtx] —
//! there is no ambient global state.  The registry is also the sole
//! authority for minting `AgentId`s, which keeps IDs aligned with the
//! motor/controller vectors that are indexed by them.

use npc_core::{AgentId, EntityId};

/// Append-only registry of `(agent, entity)` pairs.
///
/// # Iteration safety
///
/// Agents may register new siblings while another agent's tick is in
/// progress.  Callers iterate over [`snapshot`][Self::snapshot], so
/// appends during a pass never invalidate an in-progress traversal;
/// entries added mid-step become visible on the next snapshot.
#[derive(Default)]
pub struct SiblingRegistry {
    entries: Vec<(AgentId, EntityId)>,
    next_id: u32,
}

impl SiblingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next sequential `AgentId`.
    ///
    /// Allocation and registration are separate steps so a caller can
    /// build the agent's motor and controller before registering it.
    pub fn allocate(&mut self) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Record `agent` as owning `entity`.  Registering an agent that is
    /// already present is a no-op, so controller initialization and spawn
    /// paths can both register without coordination.
    pub fn register(&mut self, agent: AgentId, entity: EntityId) {
        if self.contains(agent) {
            return;
        }
        self.entries.push((agent, entity));
    }

    /// Copy of all entries in registration order.
    pub fn snapshot(&self) -> Vec<(AgentId, EntityId)> {
        self.entries.clone()
    }

    /// The world entity registered for `agent`.
    pub fn entity_of(&self, agent: AgentId) -> Option<EntityId> {
        self.entries
            .iter()
            .find(|(a, _)| *a == agent)
            .map(|(_, e)| *e)
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.entries.iter().any(|(a, _)| *a == agent)
    }

    /// Number of registered agents (allocated-but-unregistered IDs are not
    /// counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of IDs minted so far, whether or not they registered yet.
    pub fn allocated(&self) -> usize {
        self.next_id as usize
    }
}
