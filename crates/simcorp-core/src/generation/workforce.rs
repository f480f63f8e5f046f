//! Workforce generation
//!
//! The full population is created once at engine construction with
//! randomized positions and attributes inside role-specific ranges, then
//! only ever repositioned - never resized.

use hecs::{Entity, World};
use rand::Rng;

use super::floor::FloorPlan;
use super::names::staff_name;
use crate::components::{
    roam_zone, Assignment, Attributes, BobPhase, Heading, Name, Position, Role, WorkerStatus,
    ZoneId,
};
use crate::systems::bob_phase_for;

/// Workforce population counts per role
#[derive(Debug, Clone)]
pub struct WorkforceConfig {
    pub line_workers: u32,
    /// Line workers at the tail of the roster who start on break
    pub on_break: u32,
    pub engineers: u32,
    /// Engineers assigned to the engineering zone; the rest go to the R&D lab
    pub engineering_seats: u32,
    pub supervisors: u32,
}

impl Default for WorkforceConfig {
    fn default() -> Self {
        Self {
            line_workers: 28,
            on_break: 3,
            engineers: 8,
            engineering_seats: 5,
            supervisors: 5,
        }
    }
}

/// Zones supervisors patrol, cycled through in order
const SUPERVISOR_POSTS: [ZoneId; 5] = [
    ZoneId::Production,
    ZoneId::Production,
    ZoneId::Engineering,
    ZoneId::Warehouse,
    ZoneId::LoadingDock,
];

/// Generate the complete workforce
pub fn generate_workforce(
    world: &mut World,
    plan: &FloorPlan,
    config: &WorkforceConfig,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(
        (config.line_workers + config.engineers + config.supervisors) as usize,
    );
    let mut roster_idx = 0usize;

    for i in 0..config.line_workers {
        let on_break = i + config.on_break >= config.line_workers;
        let status = if on_break {
            WorkerStatus::Break
        } else {
            WorkerStatus::Working
        };
        let attributes = Attributes {
            efficiency: 60 + rng.gen_range(0..35),
            morale: 50 + rng.gen_range(0..40),
            tenure: 1 + rng.gen_range(0..6),
            salary: 45_000,
        };
        entities.push(spawn_worker(
            world,
            plan,
            roster_idx,
            Role::Worker,
            status,
            Assignment(if on_break { ZoneId::Breakroom } else { ZoneId::Production }),
            attributes,
            rng,
        ));
        roster_idx += 1;
    }

    for i in 0..config.engineers {
        let zone = if i < config.engineering_seats {
            ZoneId::Engineering
        } else {
            ZoneId::RdLab
        };
        let attributes = Attributes {
            efficiency: 70 + rng.gen_range(0..25),
            morale: 55 + rng.gen_range(0..35),
            tenure: 1 + rng.gen_range(0..8),
            salary: 85_000,
        };
        entities.push(spawn_worker(
            world,
            plan,
            roster_idx,
            Role::Engineer,
            WorkerStatus::Working,
            Assignment(zone),
            attributes,
            rng,
        ));
        roster_idx += 1;
    }

    for i in 0..config.supervisors {
        let zone = SUPERVISOR_POSTS[i as usize % SUPERVISOR_POSTS.len()];
        let attributes = Attributes {
            efficiency: 80 + rng.gen_range(0..15),
            morale: 60 + rng.gen_range(0..30),
            tenure: 2 + rng.gen_range(0..10),
            salary: 75_000,
        };
        entities.push(spawn_worker(
            world,
            plan,
            roster_idx,
            Role::Supervisor,
            WorkerStatus::Working,
            Assignment(zone),
            attributes,
            rng,
        ));
        roster_idx += 1;
    }

    entities
}

fn spawn_worker(
    world: &mut World,
    plan: &FloorPlan,
    roster_idx: usize,
    role: Role,
    status: WorkerStatus,
    assignment: Assignment,
    attributes: Attributes,
    rng: &mut impl Rng,
) -> Entity {
    let zone = plan.zone(roam_zone(assignment, status));
    let start = zone.roam_bounds().random_point(rng);

    world.spawn((
        Name::new(staff_name(roster_idx)),
        role,
        status,
        assignment,
        attributes,
        Position(start),
        Heading::new(start),
        BobPhase(bob_phase_for(roster_idx)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::build_floor_plan;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_workforce_counts() {
        let plan = build_floor_plan();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(1);

        let entities = generate_workforce(&mut world, &plan, &WorkforceConfig::default(), &mut rng);
        assert_eq!(entities.len(), 41);

        let workers = world
            .query::<&Role>()
            .iter()
            .filter(|(_, r)| **r == Role::Worker)
            .count();
        let engineers = world
            .query::<&Role>()
            .iter()
            .filter(|(_, r)| **r == Role::Engineer)
            .count();
        let supervisors = world
            .query::<&Role>()
            .iter()
            .filter(|(_, r)| **r == Role::Supervisor)
            .count();
        assert_eq!(workers, 28);
        assert_eq!(engineers, 8);
        assert_eq!(supervisors, 5);
    }

    #[test]
    fn test_every_worker_fully_equipped() {
        let plan = build_floor_plan();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(2);

        let entities = generate_workforce(&mut world, &plan, &WorkforceConfig::default(), &mut rng);
        for entity in &entities {
            assert!(world.get::<&Name>(*entity).is_ok());
            assert!(world.get::<&Attributes>(*entity).is_ok());
            assert!(world.get::<&Position>(*entity).is_ok());
            assert!(world.get::<&Heading>(*entity).is_ok());
            assert!(world.get::<&BobPhase>(*entity).is_ok());
        }
    }

    #[test]
    fn test_spawn_positions_in_roam_bounds() {
        let plan = build_floor_plan();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(3);

        generate_workforce(&mut world, &plan, &WorkforceConfig::default(), &mut rng);
        for (_, (pos, assignment, status)) in world
            .query::<(&Position, &Assignment, &WorkerStatus)>()
            .iter()
        {
            let roam = plan.zone(roam_zone(*assignment, *status)).roam_bounds();
            assert!(roam.contains(pos.0));
        }
    }

    #[test]
    fn test_break_workers_start_in_breakroom() {
        let plan = build_floor_plan();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(4);

        generate_workforce(&mut world, &plan, &WorkforceConfig::default(), &mut rng);
        let breakroom = plan.zone(ZoneId::Breakroom).roam_bounds();
        let mut on_break = 0;
        for (_, (pos, status)) in world.query::<(&Position, &WorkerStatus)>().iter() {
            if *status == WorkerStatus::Break {
                on_break += 1;
                assert!(breakroom.contains(pos.0));
            }
        }
        assert_eq!(on_break, 3);
    }

    #[test]
    fn test_attribute_ranges_by_role() {
        let plan = build_floor_plan();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(5);

        generate_workforce(&mut world, &plan, &WorkforceConfig::default(), &mut rng);
        for (_, (role, attrs)) in world.query::<(&Role, &Attributes)>().iter() {
            match role {
                Role::Worker => {
                    assert!((60..95).contains(&attrs.efficiency));
                    assert_eq!(attrs.salary, 45_000);
                }
                Role::Engineer => {
                    assert!((70..95).contains(&attrs.efficiency));
                    assert_eq!(attrs.salary, 85_000);
                }
                Role::Supervisor => {
                    assert!((80..95).contains(&attrs.efficiency));
                    assert_eq!(attrs.salary, 75_000);
                }
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let plan = build_floor_plan();

        let mut world_a = World::new();
        let mut rng_a = StdRng::seed_from_u64(99);
        generate_workforce(&mut world_a, &plan, &WorkforceConfig::default(), &mut rng_a);

        let mut world_b = World::new();
        let mut rng_b = StdRng::seed_from_u64(99);
        generate_workforce(&mut world_b, &plan, &WorkforceConfig::default(), &mut rng_b);

        let positions_a: Vec<_> = world_a.query::<&Position>().iter().map(|(_, p)| p.0).collect();
        let positions_b: Vec<_> = world_b.query::<&Position>().iter().map(|(_, p)| p.0).collect();
        assert_eq!(positions_a, positions_b);
    }
}
