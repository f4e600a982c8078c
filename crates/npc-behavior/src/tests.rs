//! Unit tests for npc-behavior.

use npc_core::{AgentId, AgentRng, EntityId, Position};
use npc_nav::NavMotor;
use npc_world::{EntitySpawner, World, WorldQuery};

use crate::state::{BehaviorState, StateKind, Transition};
use crate::{AgentConfig, AgentController, BehaviorError, SiblingRegistry, TickCtx};

// ── Harness ───────────────────────────────────────────────────────────────────

/// Owns every collaborator a controller needs, so tests read as scenarios.
struct Harness {
    world:    World,
    registry: SiblingRegistry,
    motor:    NavMotor,
    rng:      AgentRng,
    ctrl:     AgentController,
}

impl Harness {
    /// World with nav points at `route`, one "npc" agent at the origin.
    fn new(route: &[Position]) -> Self {
        let mut world = World::new();
        for &p in route {
            world.spawn_nav_point("patrol", p);
        }
        let entity = world.spawn_entity("npc", Position::ORIGIN, 1);

        let mut registry = SiblingRegistry::new();
        let agent = registry.allocate();
        let ctrl = AgentController::new(agent, entity, AgentConfig::default()).unwrap();

        Self {
            world,
            registry,
            motor: NavMotor::new(Position::ORIGIN, 1.0, 0.1),
            rng: AgentRng::new(42, agent),
            ctrl,
        }
    }

    fn square_route() -> Self {
        Self::new(&[
            Position::new(5.0, 0.0),
            Position::new(5.0, 5.0),
            Position::new(0.0, 5.0),
        ])
    }

    fn init(&mut self) -> StateKind {
        let mut ctx = TickCtx::new(
            &mut self.world,
            &mut self.motor,
            &mut self.registry,
            &mut self.rng,
        );
        self.ctrl.initialize(&mut ctx)
    }

    fn tick(&mut self) -> Vec<Transition> {
        let mut ctx = TickCtx::new(
            &mut self.world,
            &mut self.motor,
            &mut self.registry,
            &mut self.rng,
        );
        self.ctrl.tick(&mut ctx)
    }

    fn set_state(&mut self, next: BehaviorState) {
        let mut ctx = TickCtx::new(
            &mut self.world,
            &mut self.motor,
            &mut self.registry,
            &mut self.rng,
        );
        self.ctrl.set_state(next, &mut ctx);
    }

    /// Snap the motor onto its current destination.
    fn force_arrive(&mut self) {
        self.motor.advance(1e6);
    }

    fn spawn_player(&mut self, pos: Position) -> EntityId {
        self.world.spawn_entity("player", pos, 1)
    }

    fn kind(&self) -> StateKind {
        self.ctrl.state_kind().unwrap()
    }

    fn patrol_hits(&self) -> usize {
        match self.ctrl.state() {
            Some(BehaviorState::Patrol { nav_points_hit, .. }) => *nav_points_hit,
            other => panic!("expected Patrol, got {other:?}"),
        }
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn rejects_nonpositive_detection_range() {
        let config = AgentConfig {
            detection_range: 0.0,
            ..AgentConfig::default()
        };
        let result = AgentController::new(AgentId(0), EntityId(0), config);
        assert!(matches!(result, Err(BehaviorError::Config(_))));
    }

    #[test]
    fn rejects_negative_wander_range() {
        let config = AgentConfig {
            wander_range: -1.0,
            ..AgentConfig::default()
        };
        assert!(AgentController::new(AgentId(0), EntityId(0), config).is_err());
    }

    #[test]
    fn initialize_starts_in_patrol_and_registers() {
        let mut h = Harness::square_route();
        assert_eq!(h.init(), StateKind::Patrol);
        assert_eq!(h.kind(), StateKind::Patrol);
        assert!(h.registry.contains(h.ctrl.agent()));
        assert_eq!(h.ctrl.nav_points().len(), 3);
    }

    #[test]
    fn initialize_without_nav_points_falls_back_to_wander() {
        let mut h = Harness::new(&[]);
        assert_eq!(h.init(), StateKind::Wander);
        assert_eq!(h.kind(), StateKind::Wander);
        // And ticking an empty-route wanderer must not panic.
        for _ in 0..5 {
            h.tick();
            h.force_arrive();
        }
        assert_eq!(h.kind(), StateKind::Wander);
    }

    #[test]
    fn empty_nav_category_is_signaled_explicitly() {
        let mut h = Harness::new(&[]);
        assert!(matches!(
            h.ctrl.refresh_nav_points(&h.world),
            Err(BehaviorError::EmptyNavigationSet)
        ));
    }
}

// ── Nav point cycle ───────────────────────────────────────────────────────────

#[cfg(test)]
mod nav_cycle_tests {
    use super::*;

    #[test]
    fn n_calls_visit_each_point_once_then_wrap() {
        let mut h = Harness::square_route();
        h.ctrl.refresh_nav_points(&h.world).unwrap();

        let first: Vec<_> = (0..3).map(|_| h.ctrl.next_nav_point().unwrap()).collect();
        let mut sorted = first.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 3, "each point visited exactly once");

        // The (N+1)th call revisits the first.
        assert_eq!(h.ctrl.next_nav_point().unwrap(), first[0]);
    }

    #[test]
    fn empty_route_fails_explicitly() {
        let mut h = Harness::new(&[]);
        assert!(matches!(
            h.ctrl.next_nav_point(),
            Err(BehaviorError::NoNavigationTarget)
        ));
    }

    #[test]
    fn add_nav_point_grows_route() {
        let mut h = Harness::square_route();
        h.init();
        let before = h.ctrl.nav_points().len();
        let mut ctx = TickCtx::new(&mut h.world, &mut h.motor, &mut h.registry, &mut h.rng);
        let point = h.ctrl.add_nav_point(&mut ctx);
        assert_eq!(h.ctrl.nav_points().len(), before + 1);
        assert!(h.ctrl.nav_points().contains(&point));
        assert!(h.world.nav_point_pos(point).is_some());
    }

    #[test]
    fn random_destination_within_bounds() {
        let h = Harness::new(&[]);
        let mut rng = AgentRng::new(7, AgentId(0));
        for _ in 0..200 {
            let p = h.ctrl.random_destination(10.0, &mut rng);
            assert!((0.0..10.0).contains(&p.x));
            assert!((0.0..10.0).contains(&p.z));
        }
    }
}

// ── Patrol ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod patrol_tests {
    use super::*;

    #[test]
    fn arrival_fetches_next_point() {
        let mut h = Harness::square_route();
        h.init();
        let first_dest = h.motor.destination().unwrap();

        h.force_arrive();
        let fired = h.tick();
        assert!(fired.is_empty());
        assert_eq!(h.patrol_hits(), 1);
        assert_ne!(h.motor.destination().unwrap(), first_dest);
    }

    #[test]
    fn exhausted_route_transitions_to_wander() {
        let mut h = Harness::square_route();
        h.init();

        // Three arrivals drive the counter to 3 …
        for _ in 0..3 {
            h.force_arrive();
            h.tick();
        }
        assert_eq!(h.patrol_hits(), 3);

        // … and the next transition check fires Patrol → Wander.
        let fired = h.tick();
        assert_eq!(
            fired[0],
            Transition { from: StateKind::Patrol, to: StateKind::Wander }
        );
        assert_eq!(h.kind(), StateKind::Wander);
    }

    #[test]
    fn player_in_range_triggers_chase() {
        let mut h = Harness::square_route();
        h.init();
        let player = h.spawn_player(Position::new(3.0, 0.0)); // distance 3 < range 5

        let fired = h.tick();
        assert_eq!(
            fired[0],
            Transition { from: StateKind::Patrol, to: StateKind::Chase }
        );
        assert_eq!(h.ctrl.chase_target(), Some(player));
    }

    #[test]
    fn player_out_of_range_does_not_trigger_chase() {
        let mut h = Harness::square_route();
        h.init();
        h.spawn_player(Position::new(30.0, 30.0));
        h.tick();
        assert_eq!(h.kind(), StateKind::Patrol);
        assert_eq!(h.ctrl.chase_target(), None);
    }

    #[test]
    fn nearby_non_player_entity_is_ignored() {
        let mut h = Harness::square_route();
        h.init();
        h.world.spawn_entity("prop", Position::new(1.0, 0.0), 1);
        h.tick();
        assert_eq!(h.kind(), StateKind::Patrol);
    }

    #[test]
    fn range_check_has_priority_over_exhaustion() {
        let mut h = Harness::square_route();
        h.init();
        for _ in 0..3 {
            h.force_arrive();
            h.tick();
        }
        // Both conditions now hold: route exhausted AND a player in range.
        let here = h.motor.position();
        h.spawn_player(here);

        let fired = h.tick();
        assert_eq!(fired[0].to, StateKind::Chase);
    }

    #[test]
    fn first_found_target_wins() {
        let mut h = Harness::square_route();
        h.init();
        let near_first = h.spawn_player(Position::new(1.0, 0.0));
        let _closer_second = h.spawn_player(Position::new(0.5, 0.0));

        h.tick();
        // First match in query order, not the nearest.
        assert_eq!(h.ctrl.chase_target(), Some(near_first));
    }
}

// ── Chase ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod chase_tests {
    use super::*;

    fn chasing_harness() -> (Harness, EntityId) {
        let mut h = Harness::square_route();
        h.init();
        let player = h.spawn_player(Position::new(3.0, 0.0));
        h.tick();
        assert_eq!(h.kind(), StateKind::Chase);
        (h, player)
    }

    #[test]
    fn destination_tracks_moving_target() {
        let (mut h, player) = chasing_harness();
        h.world
            .set_entity_pos(player, Position::new(4.0, 1.0))
            .unwrap();
        h.tick();
        assert_eq!(h.motor.destination().unwrap(), Position::new(4.0, 1.0));
    }

    #[test]
    fn chase_speed_applied_on_enter() {
        let (h, _) = chasing_harness();
        assert_eq!(h.motor.speed(), h.ctrl.config().chase_speed);
    }

    #[test]
    fn target_leaving_range_returns_to_patrol() {
        let (mut h, player) = chasing_harness();
        h.world
            .set_entity_pos(player, Position::new(50.0, 50.0))
            .unwrap();

        let fired = h.tick();
        assert_eq!(
            fired[0],
            Transition { from: StateKind::Chase, to: StateKind::Patrol }
        );
        // Chase exit cleared the recorded target.
        assert_eq!(h.ctrl.chase_target(), None);
        // Fresh Patrol instance: counter reset, patrol speed restored.
        assert_eq!(h.patrol_hits(), 0);
        assert_eq!(h.motor.speed(), h.ctrl.config().patrol_speed);
    }

    #[test]
    fn despawned_target_returns_to_patrol() {
        let (mut h, player) = chasing_harness();
        h.world.despawn(player).unwrap();
        h.tick();
        assert_eq!(h.kind(), StateKind::Patrol);
        assert_eq!(h.ctrl.chase_target(), None);
    }

    #[test]
    fn round_trips_reset_patrol_counter() {
        let mut h = Harness::square_route();
        h.init();
        let player = h.spawn_player(Position::new(100.0, 100.0));

        for _ in 0..3 {
            // Accumulate some arrivals, then pull the player into range.
            h.force_arrive();
            h.tick();
            assert!(h.patrol_hits() > 0);

            let here = h.motor.position();
            h.world.set_entity_pos(player, here).unwrap();
            h.tick();
            assert_eq!(h.kind(), StateKind::Chase);

            h.world
                .set_entity_pos(player, Position::new(100.0, 100.0))
                .unwrap();
            h.tick();
            assert_eq!(h.kind(), StateKind::Patrol);
            // Never a stale count on re-entry.
            assert_eq!(h.patrol_hits(), 0);
        }
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander_tests {
    use super::*;

    fn wandering_harness() -> Harness {
        let mut h = Harness::new(&[]);
        h.init();
        assert_eq!(h.kind(), StateKind::Wander);
        h
    }

    #[test]
    fn samples_destination_on_first_act() {
        let mut h = wandering_harness();
        h.tick();
        let dest = h.motor.destination().unwrap();
        let range = h.ctrl.config().wander_range;
        assert!((0.0..range).contains(&dest.x));
        assert!((0.0..range).contains(&dest.z));
    }

    #[test]
    fn resamples_after_arrival() {
        let mut h = wandering_harness();
        h.tick();
        let first = h.motor.destination().unwrap();
        h.force_arrive();
        h.tick();
        let second = h.motor.destination().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn never_leaves_on_its_own() {
        let mut h = wandering_harness();
        for _ in 0..20 {
            let fired = h.tick();
            assert!(fired.is_empty());
            h.force_arrive();
        }
        assert_eq!(h.kind(), StateKind::Wander);
    }

    #[test]
    fn ignores_players_in_range() {
        // Wander has no range check: even an adjacent player is ignored.
        let mut h = wandering_harness();
        h.spawn_player(Position::new(0.5, 0.5));
        h.tick();
        assert_eq!(h.kind(), StateKind::Wander);
    }
}

// ── Multiply ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod multiply_tests {
    use super::*;

    #[test]
    fn spawns_sibling_then_returns_to_patrol() {
        let mut h = Harness::square_route();
        h.init();
        assert_eq!(h.registry.len(), 1);

        h.set_state(BehaviorState::multiply());
        let fired = h.tick();

        assert_eq!(
            fired[0],
            Transition { from: StateKind::Multiply, to: StateKind::Patrol }
        );
        assert_eq!(h.kind(), StateKind::Patrol);
        assert_eq!(h.registry.len(), 2);

        // The sibling's entity exists in the world under the agent tag.
        let (sibling, entity) = h.registry.snapshot()[1];
        assert_ne!(sibling, h.ctrl.agent());
        assert_eq!(h.world.entity_tag(entity), Some("npc"));
    }

    #[test]
    fn sibling_spawns_at_parent_position() {
        let mut h = Harness::square_route();
        h.init();
        h.force_arrive();
        let parent_pos = h.motor.position();

        h.set_state(BehaviorState::multiply());
        h.tick();

        let (_, entity) = h.registry.snapshot()[1];
        assert_eq!(h.world.entity_pos(entity), Some(parent_pos));
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn allocate_mints_sequential_ids() {
        let mut r = SiblingRegistry::new();
        assert_eq!(r.allocate(), AgentId(0));
        assert_eq!(r.allocate(), AgentId(1));
        assert_eq!(r.allocated(), 2);
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn register_is_idempotent() {
        let mut r = SiblingRegistry::new();
        let a = r.allocate();
        r.register(a, EntityId(5));
        r.register(a, EntityId(9));
        assert_eq!(r.len(), 1);
        assert_eq!(r.entity_of(a), Some(EntityId(5)));
    }

    #[test]
    fn snapshot_unaffected_by_later_appends() {
        let mut r = SiblingRegistry::new();
        let a = r.allocate();
        r.register(a, EntityId(0));
        let snap = r.snapshot();

        let b = r.allocate();
        r.register(b, EntityId(1));

        assert_eq!(snap.len(), 1);
        assert_eq!(r.len(), 2);
    }
}

// ── Transition bookkeeping ────────────────────────────────────────────────────

#[cfg(test)]
mod transition_tests {
    use super::*;

    #[test]
    fn target_recorded_during_check_survives_into_chase() {
        // The target acquired by Patrol's range check must still be set
        // when Chase acts in the same tick — only Chase's own exit clears it.
        let mut h = Harness::square_route();
        h.init();
        let player = h.spawn_player(Position::new(2.0, 0.0));

        h.tick();
        assert_eq!(h.kind(), StateKind::Chase);
        assert_eq!(h.ctrl.chase_target(), Some(player));
        // Chase acted this tick: destination points at the player.
        assert_eq!(h.motor.destination().unwrap(), Position::new(2.0, 0.0));
    }

    #[test]
    fn at_most_one_state_acts_per_tick() {
        // On the tick where Patrol → Wander fires, the wander destination
        // is sampled by Wander's act; Patrol must not also have fetched a
        // nav point after its exit.
        let mut h = Harness::square_route();
        h.init();
        for _ in 0..3 {
            h.force_arrive();
            h.tick();
        }
        let cursor_before = h.ctrl.nav_point_index();
        h.tick(); // fires Patrol → Wander, then Wander acts
        assert_eq!(h.kind(), StateKind::Wander);
        assert_eq!(h.ctrl.nav_point_index(), cursor_before);
        assert!(h.motor.destination().is_some());
    }

    #[test]
    fn tick_before_initialize_is_inert() {
        let mut h = Harness::square_route();
        let fired = h.tick();
        assert!(fired.is_empty());
        assert_eq!(h.ctrl.state_kind(), None);
    }
}
