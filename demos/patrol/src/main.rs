//! patrol-demo — one guard on a square beat.
//!
//! A single NPC patrols a four-point square route.  Mid-run a scripted
//! player walks into its detection radius (triggering a chase), walks out
//! again (back to patrol), and finally the guard is commanded to multiply.
//! Agent states and transitions stream to CSV under `output/patrol/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use npc_behavior::BehaviorState;
use npc_core::{AgentId, Position};
use npc_sim::{SimBuilder, SimConfig};
use npc_trace::{CsvTraceWriter, TraceObserver};
use npc_world::WorldQuery;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const STEP_SECS:         f32 = 0.1;
const SNAPSHOT_INTERVAL: u64 = 10;

const PATROL_PHASE_TICKS: u64 = 150; // guard walks its beat alone
const CHASE_PHASE_TICKS:  u64 = 80;  // player inside the detection radius
const RETURN_PHASE_TICKS: u64 = 100; // player gone, guard back on the beat
const FINAL_PHASE_TICKS:  u64 = 100; // after the multiply command

const PLAYER_FAR:  Position = Position { x: 40.0, z: 40.0 };
const PLAYER_NEAR: Position = Position { x: 3.0, z: 3.0 };

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let total_ticks =
        PATROL_PHASE_TICKS + CHASE_PHASE_TICKS + RETURN_PHASE_TICKS + FINAL_PHASE_TICKS;
    println!("=== patrol-demo — npc behavior framework ===");
    println!("Ticks: {total_ticks}  |  Seed: {SEED}  |  Step: {STEP_SECS} s");
    println!();

    // 1. Declare the scenario: a square beat, a distant player, one guard.
    let mut sim = SimBuilder::new(SimConfig {
        total_ticks,
        seed: SEED,
        step_secs: STEP_SECS,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL,
    })
    .nav_point(Position::new(6.0, 0.0))
    .nav_point(Position::new(6.0, 6.0))
    .nav_point(Position::new(0.0, 6.0))
    .nav_point(Position::new(0.0, 0.0))
    .entity("player", PLAYER_FAR)
    .agent_at(Position::ORIGIN)
    .build()?;

    let player = sim.world().find_by_tag("player")[0];
    println!(
        "World: {} nav points, {} entities",
        sim.world().nav_point_count(),
        sim.world().entity_count()
    );

    // 2. Trace output.
    let out_dir = Path::new("output/patrol");
    let mut obs = TraceObserver::new(CsvTraceWriter::create(out_dir)?);

    // 3. Run the scripted phases.
    let t0 = Instant::now();

    sim.run_ticks(PATROL_PHASE_TICKS, &mut obs)?;

    sim.world_mut().set_entity_pos(player, PLAYER_NEAR)?;
    sim.run_ticks(CHASE_PHASE_TICKS, &mut obs)?;

    sim.world_mut().set_entity_pos(player, PLAYER_FAR)?;
    sim.run_ticks(RETURN_PHASE_TICKS, &mut obs)?;

    sim.command_state(AgentId(0), BehaviorState::multiply())?;
    sim.run_ticks(FINAL_PHASE_TICKS, &mut obs)?;

    let elapsed = t0.elapsed();
    obs.finish()?;

    // 4. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("Traces written to {}", out_dir.display());
    println!();
    println!("{:<8} {:<10} {:<18}", "Agent", "State", "Position");
    println!("{}", "-".repeat(36));
    for (agent, _entity) in sim.registry().snapshot() {
        let kind = sim
            .state_kind(agent)?
            .map(|k| k.label())
            .unwrap_or("-");
        let pos = sim.motors().motor(agent)?.position();
        println!("{:<8} {:<10} ({:.2}, {:.2})", agent.0, kind, pos.x, pos.z);
    }

    Ok(())
}
