//! The behavior state machine — states, transitions, and per-state actions.
//!
//! # Transition table
//!
//! | State    | Checks (in priority order)                         | Act                                      |
//! |----------|----------------------------------------------------|------------------------------------------|
//! | Patrol   | target in range → Chase; route exhausted → Wander  | on arrival, fetch next nav point         |
//! | Chase    | target out of range → Patrol                       | re-issue destination at target position  |
//! | Wander   | (none — wanders until externally redirected)       | on arrival, sample a new random point    |
//! | Multiply | (none — entered externally)                        | spawn a sibling, then return to Patrol   |
//!
//! The range check in Patrol is evaluated **before** the exhaustion check,
//! so a target inside the detection radius always wins over a finished
//! route.

use npc_core::{Color, NavPointId, Position};
use npc_world::WorldApi;

use crate::controller::AgentController;
use crate::{BehaviorError, TickCtx};

/// Presentation hue while patrolling.
pub const PATROL_COLOR: Color = Color::BLUE;
/// Presentation hue while chasing.
pub const CHASE_COLOR: Color = Color::RED;
/// Presentation hue while wandering.
pub const WANDER_COLOR: Color = Color::GREEN;

// ── StateKind ─────────────────────────────────────────────────────────────────

/// Discriminant of a [`BehaviorState`], with a stable display label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    Patrol,
    Chase,
    Wander,
    Multiply,
}

impl StateKind {
    /// Stable, human-readable label (used in traces and logs).
    pub fn label(self) -> &'static str {
        match self {
            StateKind::Patrol   => "patrol",
            StateKind::Chase    => "chase",
            StateKind::Wander   => "wander",
            StateKind::Multiply => "multiply",
        }
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One observed state change: recorded by the controller, reported through
/// the simulation observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateKind,
    pub to:   StateKind,
}

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// The active behavior of one agent.
///
/// A closed tagged union: adding a state means every `match` below stops
/// compiling until its transitions and actions are written.  Variants carry
/// their state-local data; a fresh variant is constructed on every entry,
/// so counters like `nav_points_hit` can never leak across activations.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorState {
    /// Walk the nav point cycle until a target appears or the route is
    /// exhausted.
    Patrol {
        /// Arrivals counted since this Patrol activation began.
        nav_points_hit: usize,
        /// Nav point currently being walked toward.
        destination: Option<NavPointId>,
    },

    /// Pursue the controller's recorded chase target.
    Chase,

    /// Drift between random destinations.  No transition leads out of
    /// Wander on its own.
    Wander {
        /// Random point currently being walked toward.
        destination: Option<Position>,
    },

    /// Spawn one sibling agent, then return to Patrol.
    Multiply,
}

impl BehaviorState {
    /// A fresh Patrol with its arrival counter reset.
    pub fn patrol() -> Self {
        BehaviorState::Patrol {
            nav_points_hit: 0,
            destination:    None,
        }
    }

    pub fn chase() -> Self {
        BehaviorState::Chase
    }

    pub fn wander() -> Self {
        BehaviorState::Wander { destination: None }
    }

    pub fn multiply() -> Self {
        BehaviorState::Multiply
    }

    pub fn kind(&self) -> StateKind {
        match self {
            BehaviorState::Patrol { .. } => StateKind::Patrol,
            BehaviorState::Chase         => StateKind::Chase,
            BehaviorState::Wander { .. } => StateKind::Wander,
            BehaviorState::Multiply      => StateKind::Multiply,
        }
    }

    // ── Transition check ──────────────────────────────────────────────────

    /// Evaluate this state's transition conditions.
    ///
    /// Returns the successor state if a transition fires, `None` to stay.
    pub(crate) fn check_transitions<W: WorldApi>(
        &mut self,
        ctrl: &mut AgentController,
        ctx:  &mut TickCtx<'_, W>,
    ) -> Option<BehaviorState> {
        match self {
            BehaviorState::Patrol { nav_points_hit, .. } => {
                // Range check first: a visible target beats an exhausted route.
                let origin = ctx.motor.position();
                if ctrl.acquire_target(&*ctx.world, origin) {
                    return Some(BehaviorState::chase());
                }
                if *nav_points_hit >= ctrl.nav_points.len() {
                    return Some(BehaviorState::wander());
                }
                None
            }

            BehaviorState::Chase => {
                let origin = ctx.motor.position();
                if !ctrl.acquire_target(&*ctx.world, origin) {
                    return Some(BehaviorState::patrol());
                }
                None
            }

            // Wander never leaves on its own; Multiply leaves through act.
            BehaviorState::Wander { .. } | BehaviorState::Multiply => None,
        }
    }

    // ── Act ───────────────────────────────────────────────────────────────

    /// Perform this state's per-tick action.
    ///
    /// May also name a successor (Multiply's return to Patrol, and the
    /// error fallbacks); the controller applies it with the same
    /// exit-before-enter ordering as a checked transition.
    pub(crate) fn act<W: WorldApi>(
        &mut self,
        ctrl: &mut AgentController,
        ctx:  &mut TickCtx<'_, W>,
    ) -> Option<BehaviorState> {
        match self {
            BehaviorState::Patrol { nav_points_hit, destination } => {
                if destination.is_none() || ctx.motor.has_arrived() {
                    *nav_points_hit += 1;
                    match ctrl.next_nav_point() {
                        Ok(point) => {
                            *destination = Some(point);
                            if let Some(pos) = ctx.world.nav_point_pos(point) {
                                ctx.motor.set_destination(pos);
                            }
                        }
                        Err(err) => {
                            tracing::warn!(
                                agent = %ctrl.agent(),
                                error = %err,
                                "patrol has no destination, falling back to wander"
                            );
                            return Some(BehaviorState::wander());
                        }
                    }
                }
                None
            }

            BehaviorState::Chase => match ctrl.chase_target {
                Some(target) => match ctx.world.entity_pos(target) {
                    // Targets move: re-issue the destination every tick.
                    Some(pos) => {
                        ctx.motor.set_destination(pos);
                        None
                    }
                    None => {
                        tracing::warn!(
                            agent = %ctrl.agent(),
                            error = %BehaviorError::TargetLost(target),
                            "returning to patrol"
                        );
                        Some(BehaviorState::patrol())
                    }
                },
                None => Some(BehaviorState::patrol()),
            },

            BehaviorState::Wander { destination } => {
                if destination.is_none() || ctx.motor.has_arrived() {
                    let range = ctrl.config.wander_range;
                    let dest = ctrl.random_destination(range, ctx.rng);
                    *destination = Some(dest);
                    ctx.motor.set_destination(dest);
                }
                None
            }

            BehaviorState::Multiply => {
                ctrl.spawn_sibling(ctx);
                Some(BehaviorState::patrol())
            }
        }
    }

    // ── Lifecycle hooks ───────────────────────────────────────────────────

    /// Called exactly once when this state becomes active.
    pub(crate) fn on_enter<W: WorldApi>(
        &mut self,
        ctrl: &mut AgentController,
        ctx:  &mut TickCtx<'_, W>,
    ) {
        match self {
            BehaviorState::Patrol { destination, .. } => {
                ctx.motor.set_speed(ctrl.config.patrol_speed);
                ctrl.set_color(ctx.world, PATROL_COLOR);
                match ctrl.next_nav_point() {
                    Ok(point) => {
                        *destination = Some(point);
                        if let Some(pos) = ctx.world.nav_point_pos(point) {
                            ctx.motor.set_destination(pos);
                        }
                    }
                    // Leave the destination unset; the next transition
                    // check routes an empty-route patrol into Wander.
                    Err(err) => {
                        tracing::debug!(agent = %ctrl.agent(), error = %err, "patrol entered without nav points");
                    }
                }
            }

            BehaviorState::Chase => {
                ctx.motor.set_speed(ctrl.config.chase_speed);
                ctrl.set_color(ctx.world, CHASE_COLOR);
            }

            BehaviorState::Wander { .. } => {
                ctrl.set_color(ctx.world, WANDER_COLOR);
            }

            BehaviorState::Multiply => {}
        }
    }

    /// Called exactly once when this state is superseded.
    pub(crate) fn on_exit<W: WorldApi>(
        &mut self,
        ctrl: &mut AgentController,
        _ctx: &mut TickCtx<'_, W>,
    ) {
        match self {
            // The recorded target only means something while chasing.
            BehaviorState::Chase => ctrl.chase_target = None,
            BehaviorState::Patrol { .. }
            | BehaviorState::Wander { .. }
            | BehaviorState::Multiply => {}
        }
    }
}
