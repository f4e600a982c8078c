//! Flat row types written to the trace files.
//!
//! Rows carry plain scalars so the CSV headers read naturally; IDs and
//! state kinds are flattened at construction.

use npc_behavior::Transition;
use npc_core::{AgentId, Tick};
use npc_sim::AgentSample;
use serde::Serialize;

/// One agent's state at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentStateRow {
    pub tick:  u64,
    pub agent: u32,
    pub state: &'static str,
    pub x:     f32,
    pub z:     f32,
}

impl AgentStateRow {
    pub fn from_sample(tick: Tick, sample: &AgentSample) -> Self {
        Self {
            tick:  tick.0,
            agent: sample.agent.0,
            state: sample.kind.label(),
            x:     sample.pos.x,
            z:     sample.pos.z,
        }
    }
}

/// One observed state transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRow {
    pub tick:  u64,
    pub agent: u32,
    pub from:  &'static str,
    pub to:    &'static str,
}

impl TransitionRow {
    pub fn new(tick: Tick, agent: AgentId, transition: Transition) -> Self {
        Self {
            tick:  tick.0,
            agent: agent.0,
            from:  transition.from.label(),
            to:    transition.to.label(),
        }
    }
}
