//! Per-agent configuration, validated at construction.

use crate::{BehaviorError, BehaviorResult};

/// Configuration for one [`AgentController`][crate::AgentController].
///
/// Validated once by [`AgentController::new`][crate::AgentController::new];
/// a controller that exists holds a valid config, so tick-time code never
/// re-checks ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Tag of the agent's own world entity (and of spawned siblings).
    pub agent_tag: String,

    /// Tag of entities the agent chases when they enter detection range.
    pub target_tag: String,

    /// Nav point category collected into the patrol cycle.
    pub nav_category: String,

    /// Radius within which a target entity is considered found.  Must be
    /// positive.
    pub detection_range: f32,

    /// Upper bound for each axis of a random wander destination,
    /// sampled uniformly from `[0, wander_range)`.  Must be positive.
    pub wander_range: f32,

    /// Travel speed while patrolling, units per second.  Must be positive.
    pub patrol_speed: f32,

    /// Travel speed while chasing, units per second.  Must be positive.
    pub chase_speed: f32,

    /// Renderable surfaces given to sibling entities this agent spawns.
    pub surface_count: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_tag:       "npc".to_owned(),
            target_tag:      "player".to_owned(),
            nav_category:    "patrol".to_owned(),
            detection_range: 5.0,
            wander_range:    10.0,
            patrol_speed:    1.0,
            chase_speed:     2.5,
            surface_count:   1,
        }
    }
}

impl AgentConfig {
    /// Reject zero or negative ranges and speeds.
    pub fn validate(&self) -> BehaviorResult<()> {
        if self.detection_range <= 0.0 {
            return Err(BehaviorError::Config(format!(
                "detection_range must be positive, got {}",
                self.detection_range
            )));
        }
        if self.wander_range <= 0.0 {
            return Err(BehaviorError::Config(format!(
                "wander_range must be positive, got {}",
                self.wander_range
            )));
        }
        if self.patrol_speed <= 0.0 || self.chase_speed <= 0.0 {
            return Err(BehaviorError::Config(format!(
                "speeds must be positive, got patrol {} / chase {}",
                self.patrol_speed, self.chase_speed
            )));
        }
        Ok(())
    }
}
