//! Simulation engine - main entry point for driving the floor

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{BobPhase, Position};
use crate::constants::{MAX_FRAME_DELTA, MEAN_WANDER_INTERVAL, TICK_INTERVAL, WORKER_HIT_RADIUS};
use crate::generation::{build_floor_plan, generate_workforce, FloorPlan, WorkforceConfig};
use crate::grid::Vec2;
use crate::systems::{bob_offset, movement_system, wandering_system};

/// Configuration for engine construction
#[derive(Debug, Clone)]
pub struct FloorConfig {
    /// Seed for all generation and wander randomness
    pub seed: u64,
    pub workforce: WorkforceConfig,
    /// Mean seconds between wander retargets per worker.
    /// `f32::INFINITY` freezes every target in place.
    pub mean_wander_interval: f32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            seed: 0x51_C0_12,
            workforce: WorkforceConfig::default(),
            mean_wander_interval: MEAN_WANDER_INTERVAL,
        }
    }
}

/// Main simulation engine. Owns the ECS world, the floor layout, both
/// animation clocks and the random source.
///
/// Two decoupled drivers live inside `update`:
/// - worker physics integrates true elapsed time every call
/// - the machine tick advances once per accumulated `TICK_INTERVAL`
pub struct FloorEngine {
    /// ECS world containing all worker entities
    pub world: World,
    /// Static zone and machine registries
    pub plan: FloorPlan,

    anim_time: f64,
    tick: u64,
    tick_accum: f32,
    mean_wander_interval: f32,
    rng: StdRng,
}

impl FloorEngine {
    /// Create the engine and generate the full scene
    pub fn new(config: FloorConfig) -> Self {
        let plan = build_floor_plan();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(config.seed);

        generate_workforce(&mut world, &plan, &config.workforce, &mut rng);

        Self {
            world,
            plan,
            anim_time: 0.0,
            tick: 0,
            tick_accum: 0.0,
            mean_wander_interval: config.mean_wander_interval,
            rng,
        }
    }

    /// Advance the simulation by one physics sample of `delta_seconds`.
    /// The sample is capped at `MAX_FRAME_DELTA` so a suspended frame
    /// callback resumes without a positional jump.
    pub fn update(&mut self, delta_seconds: f32) {
        let dt = delta_seconds.clamp(0.0, MAX_FRAME_DELTA);
        self.anim_time += dt as f64;

        // Coarse driver: machine tick every TICK_INTERVAL of wall clock
        self.tick_accum += dt;
        while self.tick_accum >= TICK_INTERVAL {
            self.tick_accum -= TICK_INTERVAL;
            self.tick += 1;
        }

        // Continuous driver: worker physics on true elapsed time
        wandering_system(
            &mut self.world,
            &self.plan,
            &mut self.rng,
            dt,
            self.mean_wander_interval,
        );
        movement_system(&mut self.world, dt);
    }

    /// Absolute animation time in seconds since engine construction
    pub fn anim_time(&self) -> f32 {
        self.anim_time as f32
    }

    /// Current machine animation tick
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Count workers in the simulation
    pub fn worker_count(&self) -> usize {
        self.world.query::<&Position>().iter().count()
    }

    /// Nearest worker whose hit disc contains the scene point. The disc is
    /// centered on the rendered position, bob offset included.
    pub fn worker_at(&self, point: Vec2) -> Option<Entity> {
        let time = self.anim_time();
        let mut closest: Option<(Entity, f32)> = None;

        for (entity, (pos, bob)) in self.world.query::<(&Position, &BobPhase)>().iter() {
            let rendered = Vec2::new(pos.0.x, pos.0.y + bob_offset(time, bob.0));
            let dist_sq = rendered.distance_squared(&point);
            if dist_sq < WORKER_HIT_RADIUS * WORKER_HIT_RADIUS {
                match closest {
                    Some((_, best)) if dist_sq >= best => {}
                    _ => closest = Some((entity, dist_sq)),
                }
            }
        }

        closest.map(|(entity, _)| entity)
    }

    /// Index of the machine under the scene point, if any
    pub fn machine_at(&self, point: Vec2) -> Option<usize> {
        self.plan.machine_at(point)
    }
}

impl Default for FloorEngine {
    fn default() -> Self {
        Self::new(FloorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{roam_zone, Assignment, Heading, WorkerStatus};

    fn frozen_config(seed: u64) -> FloorConfig {
        FloorConfig {
            seed,
            mean_wander_interval: f32::INFINITY,
            ..FloorConfig::default()
        }
    }

    #[test]
    fn test_engine_generation() {
        let engine = FloorEngine::new(FloorConfig::default());
        assert_eq!(engine.worker_count(), 41);
        assert_eq!(engine.plan.machines.len(), 10);
        assert_eq!(engine.tick(), 0);
        assert_eq!(engine.anim_time(), 0.0);
    }

    #[test]
    fn test_tick_cadence() {
        let mut engine = FloorEngine::new(FloorConfig::default());
        // 1 second of 60 Hz frames -> 5 ticks at 200ms each
        for _ in 0..60 {
            engine.update(1.0 / 60.0);
        }
        assert_eq!(engine.tick(), 5);
        assert!((engine.anim_time() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_frame_delta_cap() {
        let mut engine = FloorEngine::new(FloorConfig::default());
        // A 10-second stall is treated as a single capped sample
        engine.update(10.0);
        assert!((engine.anim_time() - MAX_FRAME_DELTA).abs() < 1e-6);
        assert_eq!(engine.tick(), 0);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut engine = FloorEngine::new(FloorConfig::default());
        engine.update(-1.0);
        assert_eq!(engine.anim_time(), 0.0);
    }

    #[test]
    fn test_workers_stay_in_their_zones() {
        let mut engine = FloorEngine::new(FloorConfig::default());
        // A minute of simulated wandering
        for _ in 0..3600 {
            engine.update(1.0 / 60.0);
        }

        let mut checked = 0;
        for (_, (pos, assignment, status)) in engine
            .world
            .query::<(&Position, &Assignment, &WorkerStatus)>()
            .iter()
        {
            let roam = engine
                .plan
                .zone(roam_zone(*assignment, *status))
                .roam_bounds();
            // Tiny pad absorbs float error from landing exactly on a target
            // that sits on the roam boundary
            let padded = crate::grid::Rect::new(
                roam.x - 0.01,
                roam.y - 0.01,
                roam.w + 0.02,
                roam.h + 0.02,
            );
            assert!(padded.contains(pos.0));
            checked += 1;
        }
        assert_eq!(checked, 41);
    }

    #[test]
    fn test_frozen_targets_converge() {
        let mut engine = FloorEngine::new(frozen_config(11));

        // Point every worker somewhere away from its spawn, then freeze
        // retargeting and let the simulation run
        let plan = engine.plan.clone();
        let mut targets: Vec<(Entity, Vec2)> = Vec::new();
        for (entity, (heading, assignment, status)) in
            engine
                .world
                .query_mut::<(&mut Heading, &Assignment, &WorkerStatus)>()
        {
            let center = plan.zone(roam_zone(*assignment, *status)).roam_bounds().center();
            heading.target = center;
            targets.push((entity, center));
        }

        for _ in 0..6000 {
            engine.update(1.0 / 60.0);
        }

        // Targets never changed, and every worker reached and held them
        for (entity, target) in targets {
            let heading = engine.world.get::<&Heading>(entity).unwrap();
            assert_eq!(heading.target, target);
            let pos = engine.world.get::<&Position>(entity).unwrap();
            assert!(pos.0.distance(&target) < 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_trajectories() {
        let mut a = FloorEngine::new(FloorConfig { seed: 77, ..FloorConfig::default() });
        let mut b = FloorEngine::new(FloorConfig { seed: 77, ..FloorConfig::default() });

        for _ in 0..600 {
            a.update(1.0 / 60.0);
            b.update(1.0 / 60.0);
        }

        let pos_a: Vec<Vec2> = a.world.query::<&Position>().iter().map(|(_, p)| p.0).collect();
        let pos_b: Vec<Vec2> = b.world.query::<&Position>().iter().map(|(_, p)| p.0).collect();
        assert_eq!(pos_a, pos_b);
    }

    #[test]
    fn test_worker_at_finds_nearest() {
        let mut engine = FloorEngine::new(frozen_config(5));

        // Replace the generated crowd with two known avatars. At time zero
        // the bob offset is zero, so rendered == stored position.
        engine.world.clear();
        let near = engine
            .world
            .spawn((Position(Vec2::new(100.0, 100.0)), BobPhase(0.0)));
        let far = engine
            .world
            .spawn((Position(Vec2::new(106.0, 100.0)), BobPhase(0.0)));

        // Both discs contain the probe; the nearer one wins
        assert_eq!(engine.worker_at(Vec2::new(101.0, 100.0)), Some(near));
        assert_eq!(engine.worker_at(Vec2::new(105.0, 100.0)), Some(far));
        // Outside both discs
        assert_eq!(engine.worker_at(Vec2::new(140.0, 100.0)), None);
    }

    #[test]
    fn test_worker_at_misses_empty_space() {
        let engine = FloorEngine::new(frozen_config(5));
        // Far outside the canvas
        assert_eq!(engine.worker_at(Vec2::new(-500.0, -500.0)), None);
    }
}
