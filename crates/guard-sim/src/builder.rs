//! Fluent builder for constructing a [`Sim`].

use guard_core::{NpcId, SimConfig, Vec3};
use guard_world::{Pose, StaticEnvironment, WaypointRegistry};

use crate::sim::TargetTrack;
use crate::{Npc, NpcSpec, Sim, SimResult};

/// Fluent builder for [`Sim<T>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, tick duration, total ticks.
/// - `T: TargetTrack` — the target's movement script.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                              |
/// |-------------------|--------------------------------------|
/// | `.environment(e)` | empty `StaticEnvironment`            |
/// | `.spawn(spec)`    | no NPCs                              |
///
/// The waypoint registry is built from the environment **here**, eagerly,
/// before any NPC ticks — every NPC then shares the same immutable registry
/// and there is no first-access race to guard.
pub struct SimBuilder<T: TargetTrack> {
    config: SimConfig,
    environment: Option<StaticEnvironment>,
    specs: Vec<NpcSpec>,
    target: T,
}

impl<T: TargetTrack> SimBuilder<T> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, target: T) -> Self {
        Self { config, environment: None, specs: Vec::new(), target }
    }

    /// Supply the tagged-object environment (checkpoints, safe locations).
    ///
    /// If not called, an empty environment is used: patrol holds position
    /// and any runaway transition fails as a configuration error.
    pub fn environment(mut self, environment: StaticEnvironment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Add one NPC to spawn.  IDs are assigned in call order.
    pub fn spawn(mut self, spec: NpcSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Validate inputs, build the waypoint registry, spawn the NPCs, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<T>> {
        self.config.validate()?;

        let environment = self.environment.unwrap_or_default();
        let waypoints = WaypointRegistry::from_discovery(&environment);

        let npcs: Vec<Npc> = self
            .specs
            .iter()
            .enumerate()
            .map(|(i, spec)| Npc::spawn(NpcId(i as u32), spec, self.config.seed))
            .collect();

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            environment,
            waypoints,
            npcs,
            target: self.target,
            target_pose: Pose::at(Vec3::ZERO),
        })
    }
}
