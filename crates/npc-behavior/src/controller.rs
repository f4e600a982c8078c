//! The `AgentController` — one NPC's identity, nav cycle, and tick driver.

use npc_core::{AgentId, AgentRng, Color, EntityId, NavPointId, Position, SurfaceId};
use npc_world::{Presentation, WorldApi, WorldQuery};

use crate::state::{BehaviorState, StateKind, Transition};
use crate::{AgentConfig, BehaviorError, BehaviorResult, TickCtx};

/// Drives one agent's behavior state machine.
///
/// The controller owns the agent's identity, its patrol route (a cyclic
/// sequence of nav point handles with a wrapping cursor), the detection
/// radius, and the currently active [`BehaviorState`].  All world access
/// goes through the [`TickCtx`] handed in per call — the controller holds
/// no collaborator references between ticks.
///
/// # State invariant
///
/// After [`initialize`][Self::initialize] there is exactly one active
/// state at all times.  The `Option` wrapper exists so the state can be
/// detached during dispatch; it is always restored before a tick returns.
pub struct AgentController {
    agent:  AgentId,
    entity: EntityId,

    pub(crate) config: AgentConfig,

    /// Current patrol route.  Replaced wholesale on refresh.
    pub(crate) nav_points: Vec<NavPointId>,

    /// Wrapping cursor into `nav_points`.  Always reduced modulo the
    /// route length on use, so a wholesale refresh can never leave it
    /// out of bounds.
    nav_point_index: usize,

    /// Entity recorded by the last successful range check.  Cleared when
    /// Chase exits.
    pub(crate) chase_target: Option<EntityId>,

    /// Renderable surfaces cached once at initialization.
    surfaces: Vec<SurfaceId>,

    state: Option<BehaviorState>,
}

impl AgentController {
    /// Create a controller for `agent`, whose world entity is `entity`.
    ///
    /// # Errors
    ///
    /// `BehaviorError::Config` if the configuration fails validation.
    pub fn new(agent: AgentId, entity: EntityId, config: AgentConfig) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self {
            agent,
            entity,
            config,
            nav_points:      Vec::new(),
            nav_point_index: 0,
            chase_target:    None,
            surfaces:        Vec::new(),
            state:           None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Kind of the active state, `None` before initialization.
    pub fn state_kind(&self) -> Option<StateKind> {
        self.state.as_ref().map(BehaviorState::kind)
    }

    /// The active state, `None` before initialization.
    pub fn state(&self) -> Option<&BehaviorState> {
        self.state.as_ref()
    }

    pub fn nav_points(&self) -> &[NavPointId] {
        &self.nav_points
    }

    pub fn nav_point_index(&self) -> usize {
        self.nav_point_index
    }

    pub fn chase_target(&self) -> Option<EntityId> {
        self.chase_target
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// One-time setup: collect nav points, cache surfaces, register in the
    /// sibling registry, and activate the initial state.
    ///
    /// Starts in Patrol when the nav point category is populated.  With an
    /// empty category the `EmptyNavigationSet` condition is logged and the
    /// agent starts directly in Wander — Patrol cannot select a
    /// destination from an empty sequence.  Returns the kind actually
    /// started in.
    pub fn initialize<W: WorldApi>(&mut self, ctx: &mut TickCtx<'_, W>) -> StateKind {
        self.surfaces = ctx.world.surfaces(self.entity);
        ctx.registry.register(self.agent, self.entity);

        let start = match self.refresh_nav_points(&*ctx.world) {
            Ok(_) => BehaviorState::patrol(),
            Err(err) => {
                tracing::warn!(
                    agent = %self.agent,
                    error = %err,
                    "starting in wander"
                );
                BehaviorState::wander()
            }
        };
        let kind = start.kind();
        self.set_state(start, ctx);
        kind
    }

    /// Run one simulation step: transition check, then act — in that fixed
    /// order.  Only the state active *after* the check acts; a single tick
    /// never runs two states' actions.
    ///
    /// Returns the transitions that fired this tick (at most two: one from
    /// the check, one from an act-driven fallback), for observers.
    pub fn tick<W: WorldApi>(&mut self, ctx: &mut TickCtx<'_, W>) -> Vec<Transition> {
        let mut fired = Vec::new();
        let Some(mut state) = self.state.take() else {
            return fired;
        };

        if let Some(next) = state.check_transitions(self, ctx) {
            fired.push(Transition { from: state.kind(), to: next.kind() });
            state = self.swap_state(state, next, ctx);
        }

        if let Some(next) = state.act(self, ctx) {
            fired.push(Transition { from: state.kind(), to: next.kind() });
            state = self.swap_state(state, next, ctx);
        }

        self.state = Some(state);
        fired
    }

    /// Force a transition to `next` (e.g. triggering Multiply externally).
    ///
    /// The outgoing state's `on_exit` runs to completion before the
    /// incoming state's `on_enter` begins.  Returns the transition record,
    /// or `None` when no state was active yet.
    pub fn set_state<W: WorldApi>(
        &mut self,
        next: BehaviorState,
        ctx:  &mut TickCtx<'_, W>,
    ) -> Option<Transition> {
        match self.state.take() {
            Some(old) => {
                let record = Transition { from: old.kind(), to: next.kind() };
                let state = self.swap_state(old, next, ctx);
                self.state = Some(state);
                Some(record)
            }
            None => {
                let mut state = next;
                state.on_enter(self, ctx);
                self.state = Some(state);
                None
            }
        }
    }

    /// Exit the old state, enter the new one, return the new one.
    fn swap_state<W: WorldApi>(
        &mut self,
        mut old:  BehaviorState,
        mut next: BehaviorState,
        ctx:      &mut TickCtx<'_, W>,
    ) -> BehaviorState {
        old.on_exit(self, ctx);
        next.on_enter(self, ctx);
        next
    }

    // ── Navigation ────────────────────────────────────────────────────────

    /// Replace the patrol route with the world's current nav points for
    /// the configured category.
    ///
    /// # Errors
    ///
    /// `BehaviorError::EmptyNavigationSet` when the category is empty; the
    /// route is cleared so destination fetches fail explicitly instead of
    /// indexing a stale list.
    pub fn refresh_nav_points<W: WorldQuery>(&mut self, world: &W) -> BehaviorResult<usize> {
        let points = world.nav_points_in(&self.config.nav_category);
        if points.is_empty() {
            self.nav_points.clear();
            return Err(BehaviorError::EmptyNavigationSet);
        }
        let count = points.len();
        self.nav_points = points;
        Ok(count)
    }

    /// Return the nav point under the cursor, then advance the cursor by
    /// one, wrapping modulo the route length.  Repeated calls visit every
    /// point in a fixed rotation, indefinitely.
    ///
    /// # Errors
    ///
    /// `BehaviorError::NoNavigationTarget` when the route is empty.
    pub fn next_nav_point(&mut self) -> BehaviorResult<NavPointId> {
        if self.nav_points.is_empty() {
            return Err(BehaviorError::NoNavigationTarget);
        }
        let idx = self.nav_point_index % self.nav_points.len();
        self.nav_point_index = (idx + 1) % self.nav_points.len();
        Ok(self.nav_points[idx])
    }

    /// Sample a destination with independently drawn uniform coordinates
    /// in `[0, range)` on the ground plane.  Purely sampled per call —
    /// nothing is persisted.
    pub fn random_destination(&self, range: f32, rng: &mut AgentRng) -> Position {
        Position::new(rng.gen_range(0.0..range), rng.gen_range(0.0..range))
    }

    /// Spawn a new nav point at the agent's current position and refresh
    /// the route so the point is discoverable.
    ///
    /// The cursor is deliberately left alone: after the wholesale refresh
    /// it may reference a different point than before, which is accepted.
    pub fn add_nav_point<W: WorldApi>(&mut self, ctx: &mut TickCtx<'_, W>) -> NavPointId {
        let pos = ctx.motor.position();
        let point = ctx.world.spawn_nav_point(&self.config.nav_category, pos);
        if let Err(err) = self.refresh_nav_points(&*ctx.world) {
            tracing::debug!(agent = %self.agent, error = %err, "nav point refresh failed");
        }
        point
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Duplicate this agent: spawn an independent entity with the same tag
    /// at the current position, mint an `AgentId` for it, register it in
    /// the shared sibling registry, and refresh the patrol route.
    ///
    /// The orchestrating simulation materializes a controller and motor
    /// for the registered sibling on its next pass.
    pub fn spawn_sibling<W: WorldApi>(&mut self, ctx: &mut TickCtx<'_, W>) -> AgentId {
        let pos = ctx.motor.position();
        let entity =
            ctx.world
                .spawn_entity(&self.config.agent_tag, pos, self.config.surface_count);
        let sibling = ctx.registry.allocate();
        ctx.registry.register(sibling, entity);

        if let Err(err) = self.refresh_nav_points(&*ctx.world) {
            tracing::debug!(agent = %self.agent, error = %err, "nav point refresh failed");
        }

        tracing::info!(
            agent = %self.agent,
            sibling = %sibling,
            entity = %entity,
            "spawned sibling agent"
        );
        sibling
    }

    // ── Presentation ──────────────────────────────────────────────────────

    /// Apply `color` to every cached renderable surface.
    pub fn set_color<W: Presentation>(&self, world: &mut W, color: Color) {
        for &surface in &self.surfaces {
            if let Err(err) = world.apply_color(surface, color) {
                tracing::debug!(agent = %self.agent, error = %err, "stale surface skipped");
            }
        }
    }

    // ── Detection ─────────────────────────────────────────────────────────

    /// `true` if any entity tagged `tag` lies within the detection range
    /// of `from`; the first match (in the world's query order) is recorded
    /// as the chase target.  On a miss the recorded target is left
    /// unchanged.
    pub fn target_in_range<W: WorldQuery>(&mut self, world: &W, from: Position, tag: &str) -> bool {
        let candidates = world.find_by_tag(tag);
        self.scan_candidates(world, from, &candidates)
    }

    /// Range check against the configured chase tag.
    pub(crate) fn acquire_target<W: WorldQuery>(&mut self, world: &W, from: Position) -> bool {
        let candidates = world.find_by_tag(&self.config.target_tag);
        self.scan_candidates(world, from, &candidates)
    }

    fn scan_candidates<W: WorldQuery>(
        &mut self,
        world:      &W,
        from:       Position,
        candidates: &[EntityId],
    ) -> bool {
        for &entity in candidates {
            if entity == self.entity {
                continue;
            }
            if let Some(pos) = world.entity_pos(entity) {
                if from.distance(pos) < self.config.detection_range {
                    self.chase_target = Some(entity);
                    return true;
                }
            }
        }
        false
    }
}
