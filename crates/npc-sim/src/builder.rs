//! Fluent construction of a [`Sim`].

use npc_behavior::{AgentConfig, AgentController, SiblingRegistry, TickCtx};
use npc_core::{AgentRng, EntityId, Position};
use npc_nav::{MotorStore, NavMotor};
use npc_world::{EntitySpawner, World};

use crate::{Sim, SimConfig, SimResult};

const DEFAULT_ARRIVE_RADIUS: f32 = 0.5;

/// Declares a world and its initial agents, then builds a ready [`Sim`].
///
/// Spawn order is fixed: nav points, then scripted entities, then agents.
/// IDs are therefore stable for a given declaration sequence, which tests
/// and traces rely on.
///
/// ```no_run
/// use npc_core::Position;
/// use npc_sim::{SimBuilder, SimConfig};
///
/// let sim = SimBuilder::new(SimConfig::default())
///     .nav_point(Position::new(5.0, 0.0))
///     .nav_point(Position::new(5.0, 5.0))
///     .entity("player", Position::new(20.0, 20.0))
///     .agent_at(Position::ORIGIN)
///     .build()
///     .unwrap();
/// ```
pub struct SimBuilder {
    config:        SimConfig,
    agent_config:  AgentConfig,
    arrive_radius: f32,
    nav_points:    Vec<(String, Position)>,
    entities:      Vec<(String, Position, usize)>,
    agents:        Vec<Position>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            agent_config:  AgentConfig::default(),
            arrive_radius: DEFAULT_ARRIVE_RADIUS,
            nav_points:    Vec::new(),
            entities:      Vec::new(),
            agents:        Vec::new(),
        }
    }

    /// Replace the per-agent configuration applied to every agent,
    /// including siblings spawned mid-run.
    pub fn agent_config(mut self, config: AgentConfig) -> Self {
        self.agent_config = config;
        self
    }

    /// Motor arrival radius for every agent.
    pub fn arrive_radius(mut self, radius: f32) -> Self {
        self.arrive_radius = radius;
        self
    }

    /// Declare a nav point in the configured patrol category.
    pub fn nav_point(mut self, pos: Position) -> Self {
        self.nav_points
            .push((self.agent_config.nav_category.clone(), pos));
        self
    }

    /// Declare a nav point in an explicit category.
    pub fn nav_point_in(mut self, category: &str, pos: Position) -> Self {
        self.nav_points.push((category.to_owned(), pos));
        self
    }

    /// Declare a non-agent entity (a player, a prop) with one surface.
    pub fn entity(mut self, tag: &str, pos: Position) -> Self {
        self.entities.push((tag.to_owned(), pos, 1));
        self
    }

    /// Declare a behavior-driven agent starting at `pos`.
    pub fn agent_at(mut self, pos: Position) -> Self {
        self.agents.push(pos);
        self
    }

    /// Validate the declaration and assemble the simulation.
    ///
    /// Every declared agent is spawned, given its motor, controller and
    /// RNG, and initialized before the first tick, so all of them see the
    /// full nav point set.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        self.agent_config.validate()?;

        let mut world = World::new();
        for (category, pos) in &self.nav_points {
            world.spawn_nav_point(category, *pos);
        }
        for (tag, pos, surface_count) in &self.entities {
            world.spawn_entity(tag, *pos, *surface_count);
        }

        let mut registry = SiblingRegistry::new();
        let mut motors = MotorStore::new();
        let mut controllers = Vec::with_capacity(self.agents.len());
        let mut rngs = Vec::with_capacity(self.agents.len());

        let mut spawned: Vec<EntityId> = Vec::with_capacity(self.agents.len());
        for &pos in &self.agents {
            let entity = world.spawn_entity(
                &self.agent_config.agent_tag,
                pos,
                self.agent_config.surface_count,
            );
            spawned.push(entity);
        }

        for (&pos, &entity) in self.agents.iter().zip(&spawned) {
            let agent = registry.allocate();
            motors.push(NavMotor::new(
                pos,
                self.agent_config.patrol_speed,
                self.arrive_radius,
            ));
            let mut ctrl = AgentController::new(agent, entity, self.agent_config.clone())?;
            rngs.push(AgentRng::new(self.config.seed, agent));

            let motor = motors.motor_mut(agent)?;
            let mut ctx =
                TickCtx::new(&mut world, motor, &mut registry, &mut rngs[agent.index()]);
            ctrl.initialize(&mut ctx);
            controllers.push(ctrl);
        }

        Ok(Sim::new(
            self.config,
            self.agent_config,
            self.arrive_radius,
            world,
            motors,
            registry,
            controllers,
            rngs,
        ))
    }
}
