//! The tick loop.

use npc_behavior::{
    AgentConfig, AgentController, BehaviorState, SiblingRegistry, StateKind, TickCtx,
};
use npc_core::{AgentId, AgentRng, Tick};
use npc_nav::{MotorStore, NavMotor};
use npc_world::{World, WorldQuery};

use crate::observer::{AgentSample, SimObserver};
use crate::{SimConfig, SimError, SimResult};

/// A running simulation: the world, every agent's motor, controller and RNG,
/// and the tick counter.
///
/// Built by [`SimBuilder`][crate::SimBuilder].  All per-agent vectors are
/// indexed by `AgentId`; the sibling registry is the only ID-minting
/// authority, which keeps the indices aligned.
///
/// # Tick order
///
/// 1. All motors integrate one `step_secs` step.
/// 2. Motor positions are mirrored into the world, so every agent's range
///    checks this tick see every other agent's post-move position.
/// 3. Each agent ticks, in ascending agent-ID order, over a snapshot of the
///    registry taken at the start of the pass.
/// 4. Agents registered during the pass (Multiply) are materialized: they
///    get a motor, controller and RNG, and take their first tick next tick.
pub struct Sim {
    config:       SimConfig,
    agent_config: AgentConfig,
    arrive_radius: f32,

    world:       World,
    motors:      MotorStore,
    registry:    SiblingRegistry,
    controllers: Vec<AgentController>,
    rngs:        Vec<AgentRng>,

    tick: Tick,
}

impl Sim {
    pub(crate) fn new(
        config:        SimConfig,
        agent_config:  AgentConfig,
        arrive_radius: f32,
        world:         World,
        motors:        MotorStore,
        registry:      SiblingRegistry,
        controllers:   Vec<AgentController>,
        rngs:          Vec<AgentRng>,
    ) -> Self {
        Self {
            config,
            agent_config,
            arrive_radius,
            world,
            motors,
            registry,
            controllers,
            rngs,
            tick: Tick::ZERO,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access between ticks, for scripted scenarios that
    /// move or despawn non-agent entities (agent entities are overwritten
    /// by the position mirror every tick).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn registry(&self) -> &SiblingRegistry {
        &self.registry
    }

    pub fn motors(&self) -> &MotorStore {
        &self.motors
    }

    /// The next tick to execute.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Number of materialized agents.
    pub fn agent_count(&self) -> usize {
        self.controllers.len()
    }

    pub fn controller(&self, agent: AgentId) -> SimResult<&AgentController> {
        self.controllers
            .get(agent.index())
            .ok_or(SimError::UnknownAgent(agent))
    }

    pub fn state_kind(&self, agent: AgentId) -> SimResult<Option<StateKind>> {
        Ok(self.controller(agent)?.state_kind())
    }

    // ── External commands ─────────────────────────────────────────────────

    /// Force `agent` into `state` between ticks (e.g. triggering Multiply).
    ///
    /// Runs the normal exit-before-enter hook sequence.
    pub fn command_state(&mut self, agent: AgentId, state: BehaviorState) -> SimResult<()> {
        let ctrl = self
            .controllers
            .get_mut(agent.index())
            .ok_or(SimError::UnknownAgent(agent))?;
        let motor = self.motors.motor_mut(agent)?;
        let mut ctx = TickCtx::new(
            &mut self.world,
            motor,
            &mut self.registry,
            &mut self.rngs[agent.index()],
        );
        ctrl.set_state(state, &mut ctx);
        Ok(())
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Run for `config.total_ticks` ticks.
    pub fn run(&mut self, observer: &mut dyn SimObserver) -> SimResult<Tick> {
        self.run_ticks(self.config.total_ticks, observer)
    }

    /// Run `ticks` more ticks, then fire `on_sim_end`.
    pub fn run_ticks(&mut self, ticks: u64, observer: &mut dyn SimObserver) -> SimResult<Tick> {
        let end = self.tick.offset(ticks);
        while self.tick < end {
            self.step(observer)?;
        }
        observer.on_sim_end(self.tick);
        tracing::info!(tick = %self.tick, agents = self.agent_count(), "run finished");
        Ok(self.tick)
    }

    /// Execute exactly one tick.
    pub fn step(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        observer.on_tick_start(self.tick);

        self.motors.advance_all(self.config.step_secs);
        self.mirror_positions()?;

        // Snapshot: agents registered mid-pass do not tick until next tick.
        for (agent, _entity) in self.registry.snapshot() {
            let Some(ctrl) = self.controllers.get_mut(agent.index()) else {
                continue;
            };
            let motor = self.motors.motor_mut(agent)?;
            let mut ctx = TickCtx::new(
                &mut self.world,
                motor,
                &mut self.registry,
                &mut self.rngs[agent.index()],
            );
            for transition in ctrl.tick(&mut ctx) {
                observer.on_transition(self.tick, agent, transition);
            }
        }

        self.materialize_pending()?;
        self.emit_snapshot(observer)?;
        observer.on_tick_end(self.tick, self.controllers.len());

        self.tick = self.tick + 1;
        Ok(())
    }

    /// Copy every agent's motor position onto its world entity.
    fn mirror_positions(&mut self) -> SimResult<()> {
        for (agent, entity) in self.registry.snapshot() {
            // Entries awaiting materialization have no motor yet.
            let Ok(motor) = self.motors.motor(agent) else {
                continue;
            };
            self.world
                .set_entity_pos(entity, motor.position())
                .map_err(|_| SimError::DanglingEntity(entity))?;
        }
        Ok(())
    }

    /// Give every registered-but-unmaterialized agent a motor, controller,
    /// and RNG, and run its one-time initialization.
    fn materialize_pending(&mut self) -> SimResult<usize> {
        let pending: Vec<_> = self
            .registry
            .snapshot()
            .into_iter()
            .skip(self.controllers.len())
            .collect();

        for &(agent, entity) in &pending {
            let pos = self
                .world
                .entity_pos(entity)
                .ok_or(SimError::DanglingEntity(entity))?;

            let minted = self.motors.push(NavMotor::new(
                pos,
                self.agent_config.patrol_speed,
                self.arrive_radius,
            ));
            debug_assert_eq!(minted, agent);

            let mut ctrl = AgentController::new(agent, entity, self.agent_config.clone())?;
            self.rngs.push(AgentRng::new(self.config.seed, agent));

            let motor = self.motors.motor_mut(agent)?;
            let mut ctx = TickCtx::new(
                &mut self.world,
                motor,
                &mut self.registry,
                &mut self.rngs[agent.index()],
            );
            let kind = ctrl.initialize(&mut ctx);
            tracing::debug!(agent = %agent, start = %kind, "sibling materialized");
            self.controllers.push(ctrl);
        }
        Ok(pending.len())
    }

    fn emit_snapshot(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        let interval = self.config.snapshot_interval_ticks;
        if interval == 0 || self.tick.0 % interval != 0 {
            return Ok(());
        }

        let mut samples = Vec::with_capacity(self.controllers.len());
        for (agent, entity) in self.registry.snapshot() {
            let Some(ctrl) = self.controllers.get(agent.index()) else {
                continue;
            };
            let Some(kind) = ctrl.state_kind() else {
                continue;
            };
            let pos = self.motors.motor(agent)?.position();
            samples.push(AgentSample { agent, entity, kind, pos });
        }
        observer.on_snapshot(self.tick, &samples);
        Ok(())
    }
}
