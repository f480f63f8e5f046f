//! Movement system - advances workers toward their targets
//!
//! Straight-line target seeking at fixed speed, integrated with true elapsed
//! time per sample. No pathfinding and no collision; zones are convex so a
//! worker heading for an in-zone target stays in-zone the whole way.

use hecs::World;

use crate::components::{Heading, Position};
use crate::constants::{ARRIVAL_EPSILON, WORKER_SPEED};
use crate::grid::Vec2;

/// Move every worker toward its heading target
pub fn movement_system(world: &mut World, delta_seconds: f32) {
    for (_, (pos, heading)) in world.query_mut::<(&mut Position, &Heading)>() {
        pos.0 = step_toward(pos.0, heading.target, WORKER_SPEED, delta_seconds);
    }
}

/// Advance one position toward a target, never overshooting.
/// Below the arrival epsilon the worker counts as arrived and holds still.
pub fn step_toward(current: Vec2, target: Vec2, speed: f32, delta_seconds: f32) -> Vec2 {
    let diff = target - current;
    let distance = diff.length();

    if distance < ARRIVAL_EPSILON {
        return current;
    }

    let step = (speed * delta_seconds).min(distance);
    current + diff.normalize() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Assignment, WorkerStatus, ZoneId};

    #[test]
    fn test_movement_arrives() {
        let mut world = World::new();

        let entity = world.spawn((
            Position(Vec2::new(0.0, 0.0)),
            Heading::new(Vec2::new(10.0, 0.0)),
        ));

        // 1 second at 15 px/s covers the 10 px distance with room to spare
        movement_system(&mut world, 1.0);

        let pos = world.get::<&Position>(entity).unwrap();
        assert!((pos.0.x - 10.0).abs() < 0.01);
        assert!((pos.0.y - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_movement_partial() {
        let mut world = World::new();

        let entity = world.spawn((
            Position(Vec2::new(0.0, 0.0)),
            Heading::new(Vec2::new(100.0, 0.0)),
        ));

        // 1 second at 15 px/s moves exactly 15 px
        movement_system(&mut world, 1.0);

        let pos = world.get::<&Position>(entity).unwrap();
        assert!((pos.0.x - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_no_overshoot() {
        let start = Vec2::new(0.0, 0.0);
        let target = Vec2::new(30.0, 40.0); // 50 px away
        let mut pos = start;

        for _ in 0..100 {
            let next = step_toward(pos, target, WORKER_SPEED, 0.25);
            let moved = next.distance(&pos);
            assert!(moved <= WORKER_SPEED * 0.25 + 1e-4);
            assert!(moved <= pos.distance(&target) + 1e-4);
            pos = next;
        }

        // Long since arrived, and holding
        assert!(pos.distance(&target) < ARRIVAL_EPSILON);
        let held = step_toward(pos, target, WORKER_SPEED, 0.25);
        assert_eq!(held, pos);
    }

    #[test]
    fn test_rate_invariance() {
        // Same wall-clock duration sampled at 30 Hz vs 120 Hz must land on
        // the same trajectory point.
        let start = Vec2::new(12.0, 300.0);
        let target = Vec2::new(412.0, 80.0);
        let duration = 8.0;

        let mut coarse = start;
        for _ in 0..(duration * 30.0) as usize {
            coarse = step_toward(coarse, target, WORKER_SPEED, 1.0 / 30.0);
        }

        let mut fine = start;
        for _ in 0..(duration * 120.0) as usize {
            fine = step_toward(fine, target, WORKER_SPEED, 1.0 / 120.0);
        }

        assert!(coarse.distance(&fine) < 1.0);
    }

    #[test]
    fn test_held_target_is_reached_and_kept() {
        // With retargeting never firing, the initial target is the final
        // resting position.
        let mut world = World::new();
        let target = Vec2::new(200.0, 150.0);
        let entity = world.spawn((
            Position(Vec2::new(40.0, 40.0)),
            Heading::new(target),
            Assignment(ZoneId::Production),
            WorkerStatus::Working,
        ));

        for _ in 0..2000 {
            movement_system(&mut world, 1.0 / 60.0);
        }

        let heading = world.get::<&Heading>(entity).unwrap();
        assert_eq!(heading.target, target);
        let pos = world.get::<&Position>(entity).unwrap();
        assert!(pos.0.distance(&target) < ARRIVAL_EPSILON);
    }
}
