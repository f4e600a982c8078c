//! The `MotorStore` — every agent's motor, indexed by `AgentId`.

use npc_core::AgentId;

use crate::{NavError, NavMotor, NavResult};

/// Holds one [`NavMotor`] per agent.
///
/// The backing `Vec` is indexed by `AgentId`, matching the sequential ID
/// allocation in the sibling registry: motor `i` belongs to agent `i`.
/// New motors are appended when sibling agents spawn mid-run.
#[derive(Default)]
pub struct MotorStore {
    motors: Vec<NavMotor>,
}

impl MotorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a motor for the next agent.  Returns its `AgentId`-shaped index.
    pub fn push(&mut self, motor: NavMotor) -> AgentId {
        let id = AgentId(self.motors.len() as u32);
        self.motors.push(motor);
        id
    }

    pub fn len(&self) -> usize {
        self.motors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motors.is_empty()
    }

    /// Shared access to one agent's motor.
    pub fn motor(&self, agent: AgentId) -> NavResult<&NavMotor> {
        self.motors
            .get(agent.index())
            .ok_or(NavError::UnknownAgent(agent))
    }

    /// Exclusive access to one agent's motor.
    pub fn motor_mut(&mut self, agent: AgentId) -> NavResult<&mut NavMotor> {
        self.motors
            .get_mut(agent.index())
            .ok_or(NavError::UnknownAgent(agent))
    }

    /// Integrate all motors by one `dt`-second step.
    pub fn advance_all(&mut self, dt: f32) {
        for motor in &mut self.motors {
            motor.advance(dt);
        }
    }
}
