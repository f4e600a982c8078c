//! Observation hooks for a simulation run.

use npc_behavior::{StateKind, Transition};
use npc_core::{AgentId, EntityId, Position, Tick};

/// One agent's observable state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSample {
    pub agent:  AgentId,
    pub entity: EntityId,
    pub kind:   StateKind,
    pub pos:    Position,
}

/// Callbacks fired by [`Sim::run`][crate::Sim::run].
///
/// All methods default to no-ops, so observers implement only what they
/// care about.  Hooks run on the simulation thread; heavy work in a hook
/// stalls the run.
pub trait SimObserver {
    /// Start of a tick, before motors advance.
    fn on_tick_start(&mut self, tick: Tick) {
        let _ = tick;
    }

    /// A state transition fired during `agent`'s tick.
    fn on_transition(&mut self, tick: Tick, agent: AgentId, transition: Transition) {
        let _ = (tick, agent, transition);
    }

    /// End of a tick, after sibling materialization.  `agents` is the
    /// number of materialized agents at that point.
    fn on_tick_end(&mut self, tick: Tick, agents: usize) {
        let _ = (tick, agents);
    }

    /// Periodic agent-state snapshot, per `snapshot_interval_ticks`.
    /// Samples are in ascending agent-ID order.
    fn on_snapshot(&mut self, tick: Tick, samples: &[AgentSample]) {
        let _ = (tick, samples);
    }

    /// The run finished; `tick` is the first tick that did not execute.
    fn on_sim_end(&mut self, tick: Tick) {
        let _ = tick;
    }
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
