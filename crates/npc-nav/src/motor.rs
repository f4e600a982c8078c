//! Per-agent movement state.

use npc_core::Position;

/// One agent's navigation state.
///
/// A motor is either **idle** (no destination) or **travelling** toward a
/// destination at `speed` units per second.  Arrival is reached when the
/// remaining distance falls within `arrive_radius`; the destination then
/// stays set so repeated [`has_arrived`][NavMotor::has_arrived] polls keep
/// answering `true` until a new destination is issued.
#[derive(Debug, Clone, PartialEq)]
pub struct NavMotor {
    position:      Position,
    destination:   Option<Position>,
    speed:         f32,
    arrive_radius: f32,
}

impl NavMotor {
    /// Create an idle motor at `position`.
    pub fn new(position: Position, speed: f32, arrive_radius: f32) -> Self {
        Self {
            position,
            destination: None,
            speed,
            arrive_radius,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn destination(&self) -> Option<Position> {
        self.destination
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Begin travelling toward `dest`.  Replaces any previous destination.
    #[inline]
    pub fn set_destination(&mut self, dest: Position) {
        self.destination = Some(dest);
    }

    /// Change the travel speed, effective from the next advance.
    #[inline]
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// `true` if a destination has been issued (reached or not).
    #[inline]
    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    /// `true` if the current destination is within `arrive_radius`.
    ///
    /// `false` while no destination is set — an idle motor has not
    /// "arrived" anywhere.
    pub fn has_arrived(&self) -> bool {
        match self.destination {
            Some(dest) => self.position.distance(dest) <= self.arrive_radius,
            None => false,
        }
    }

    /// Integrate one time step of `dt` seconds toward the destination.
    ///
    /// No-op when idle or already arrived.  Overshoot snaps exactly onto
    /// the destination.
    pub fn advance(&mut self, dt: f32) {
        if let Some(dest) = self.destination {
            if self.position.distance(dest) > self.arrive_radius {
                self.position = self.position.step_toward(dest, self.speed * dt);
            }
        }
    }
}
