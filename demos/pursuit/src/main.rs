//! pursuit — smallest example for the guard NPC framework.
//!
//! Two guards patrol a square yard while a scripted intruder approaches,
//! gets chased off, and retreats.  Every state transition is printed as it
//! happens, followed by a per-guard summary.

use std::time::Instant;

use anyhow::Result;

use guard_behavior::BehaviorKind;
use guard_core::{NpcId, SimConfig, Tick, Vec3};
use guard_sim::{NpcSpec, SimBuilder, SimObserver, TargetTrack};
use guard_world::{Pose, StaticEnvironment};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64 = 42;
const TICK_DURATION_SECS: f32 = 1.0 / 30.0; // 30 Hz game tick
const TOTAL_TICKS:        u64 = 1_800;      // 60 seconds

/// Corners of the patrol yard.
const CHECKPOINTS: [Vec3; 4] = [
    Vec3 { x: 0.0,  y: 0.0, z: 0.0 },
    Vec3 { x: 16.0, y: 0.0, z: 0.0 },
    Vec3 { x: 16.0, y: 0.0, z: 16.0 },
    Vec3 { x: 0.0,  y: 0.0, z: 16.0 },
];

/// Guard house the NPCs flee to when ambushed.
const SAFE_LOCATION: Vec3 = Vec3 { x: -20.0, y: 0.0, z: 8.0 };

// ── Intruder script ───────────────────────────────────────────────────────────

/// Piecewise-linear movement script: hold the first keyframe, interpolate
/// between neighbours, hold the last.  Faces the direction of travel.
struct ScriptedTarget {
    keyframes: Vec<(Tick, Vec3)>,
}

impl TargetTrack for ScriptedTarget {
    fn pose(&mut self, tick: Tick) -> Pose {
        let mut position = self.keyframes[0].1;
        let mut forward  = Vec3::FORWARD;

        for pair in self.keyframes.windows(2) {
            let (t0, p0) = pair[0];
            let (t1, p1) = pair[1];
            if tick < t0 {
                break;
            }
            if tick >= t1 {
                position = p1;
                continue;
            }
            let span = (t1.0 - t0.0) as f32;
            let frac = (tick.0 - t0.0) as f32 / span;
            position = p0 + (p1 - p0) * frac;
            forward  = (p1 - p0).normalized();
        }

        Pose::new(position, forward)
    }
}

fn intruder_script() -> ScriptedTarget {
    ScriptedTarget {
        keyframes: vec![
            (Tick(0),     Vec3::new(60.0, 0.0, 30.0)), // lurk out of sight
            (Tick(300),   Vec3::new(60.0, 0.0, 30.0)),
            (Tick(600),   Vec3::new(8.0, 0.0, 6.0)),   // sneak into the yard
            (Tick(900),   Vec3::new(8.0, 0.0, 6.0)),   // linger, get spotted
            (Tick(1_200), Vec3::new(60.0, 0.0, 30.0)), // flee
        ],
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct TransitionPrinter {
    transitions: usize,
    cue_heard:   bool,
}

impl SimObserver for TransitionPrinter {
    fn on_transition(&mut self, npc: NpcId, tick: Tick, from: BehaviorKind, to: BehaviorKind) {
        self.transitions += 1;
        if to == BehaviorKind::Attack {
            self.cue_heard = true;
        }
        let secs = tick.0 as f32 * TICK_DURATION_SECS;
        println!("{tick} ({secs:5.1} s)  {npc}: {from} -> {to}");
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!();
        println!("Reached {final_tick} with {} transitions", self.transitions);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== pursuit — guard NPC demo ===");
    println!("Guards: 2  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Tag the yard: four checkpoint corners and one safe location.
    let mut env = StaticEnvironment::new();
    env.register_all("Checkpoint", 0, &CHECKPOINTS)?;
    env.register_all("Safe", 100, &[SAFE_LOCATION])?;
    println!(
        "Environment: {} checkpoints, {} safe locations",
        env.count_tagged("Checkpoint"),
        env.count_tagged("Safe"),
    );

    // 2. Sim config.
    let config = SimConfig {
        seed:               SEED,
        tick_duration_secs: TICK_DURATION_SECS,
        total_ticks:        TOTAL_TICKS,
    };

    // 3. Two guards on opposite corners, facing into the yard.
    let mut sim = SimBuilder::new(config, intruder_script())
        .environment(env)
        .spawn(NpcSpec::at(CHECKPOINTS[0]).facing(Vec3::FORWARD))
        .spawn(NpcSpec::at(CHECKPOINTS[2]).facing(Vec3::new(0.0, 0.0, -1.0)))
        .build()?;

    // 4. Run, printing transitions as they happen.
    let mut obs = TransitionPrinter::default();
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    if obs.cue_heard {
        println!("The intruder got close enough to be shot at.");
    }
    println!();
    println!("{:<8} {:<9} {:<22} {}", "Guard", "State", "Position", "Shots cued");
    println!("{}", "-".repeat(52));
    for npc in &sim.npcs {
        let cues = npc.audio.as_ref().map_or(0, |a| a.play_count());
        println!(
            "{:<8} {:<9} {:<22} {}",
            npc.id.0,
            npc.controller.kind().as_str(),
            npc.pose.position.to_string(),
            cues,
        );
    }

    Ok(())
}
