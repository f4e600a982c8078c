//! Unit tests for npc-nav.

use npc_core::{AgentId, Position};

use crate::{MotorStore, NavError, NavMotor};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn motor_at_origin() -> NavMotor {
    NavMotor::new(Position::ORIGIN, 1.0, 0.1)
}

// ── NavMotor ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motor_tests {
    use super::*;

    #[test]
    fn idle_motor_has_not_arrived() {
        let m = motor_at_origin();
        assert!(!m.has_destination());
        assert!(!m.has_arrived());
    }

    #[test]
    fn advance_without_destination_is_noop() {
        let mut m = motor_at_origin();
        m.advance(10.0);
        assert_eq!(m.position(), Position::ORIGIN);
    }

    #[test]
    fn advances_toward_destination_at_speed() {
        let mut m = motor_at_origin();
        m.set_destination(Position::new(10.0, 0.0));
        m.advance(1.0);
        assert!((m.position().x - 1.0).abs() < 1e-6);
        assert!(!m.has_arrived());
    }

    #[test]
    fn arrives_within_radius() {
        let mut m = motor_at_origin();
        m.set_destination(Position::new(3.0, 0.0));
        for _ in 0..4 {
            m.advance(1.0);
        }
        assert!(m.has_arrived());
        // Arrival is sticky until a new destination is issued.
        m.advance(1.0);
        assert!(m.has_arrived());
    }

    #[test]
    fn overshoot_snaps_to_destination() {
        let mut m = NavMotor::new(Position::ORIGIN, 100.0, 0.1);
        let dest = Position::new(2.0, 2.0);
        m.set_destination(dest);
        m.advance(1.0);
        assert_eq!(m.position(), dest);
        assert!(m.has_arrived());
    }

    #[test]
    fn set_speed_changes_step_size() {
        let mut m = motor_at_origin();
        m.set_destination(Position::new(100.0, 0.0));
        m.set_speed(5.0);
        m.advance(1.0);
        assert!((m.position().x - 5.0).abs() < 1e-6);
    }

    #[test]
    fn new_destination_clears_arrival() {
        let mut m = NavMotor::new(Position::ORIGIN, 10.0, 0.1);
        m.set_destination(Position::new(1.0, 0.0));
        m.advance(1.0);
        assert!(m.has_arrived());
        m.set_destination(Position::new(50.0, 0.0));
        assert!(!m.has_arrived());
    }
}

// ── MotorStore ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_ids() {
        let mut store = MotorStore::new();
        assert_eq!(store.push(motor_at_origin()), AgentId(0));
        assert_eq!(store.push(motor_at_origin()), AgentId(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_agent_errors() {
        let store = MotorStore::new();
        assert!(matches!(
            store.motor(AgentId(0)),
            Err(NavError::UnknownAgent(_))
        ));
    }

    #[test]
    fn advance_all_moves_every_motor() {
        let mut store = MotorStore::new();
        let a = store.push(motor_at_origin());
        let b = store.push(NavMotor::new(Position::new(10.0, 0.0), 2.0, 0.1));
        store.motor_mut(a).unwrap().set_destination(Position::new(5.0, 0.0));
        store.motor_mut(b).unwrap().set_destination(Position::new(0.0, 0.0));

        store.advance_all(1.0);

        assert!((store.motor(a).unwrap().position().x - 1.0).abs() < 1e-6);
        assert!((store.motor(b).unwrap().position().x - 8.0).abs() < 1e-6);
    }
}
