//! Wandering system - gives workers fresh movement targets
//!
//! Each sample, every worker independently rolls against an elapsed-time
//! derived probability and on success picks a uniformly-random point inside
//! its roam rectangle. The exponential-interval model keeps the wander
//! cadence identical at any sample rate.

use hecs::World;
use rand::Rng;

use crate::components::{roam_zone, Assignment, Heading, WorkerStatus};
use crate::generation::FloorPlan;

/// Probability that a worker retargets during an interval of `delta_seconds`,
/// given a mean interval between retargets. Memoryless: composing two
/// intervals multiplies the miss probabilities.
pub fn retarget_probability(delta_seconds: f32, mean_interval: f32) -> f32 {
    if mean_interval <= 0.0 {
        return 1.0;
    }
    1.0 - (-delta_seconds / mean_interval).exp()
}

/// Roll every worker for a new wander target inside its roam rectangle.
/// A fresh target may equal the current one; rolls are independent across
/// workers and samples.
pub fn wandering_system(
    world: &mut World,
    plan: &FloorPlan,
    rng: &mut impl Rng,
    delta_seconds: f32,
    mean_interval: f32,
) {
    let probability = retarget_probability(delta_seconds, mean_interval);

    for (_, (heading, assignment, status)) in
        world.query_mut::<(&mut Heading, &Assignment, &WorkerStatus)>()
    {
        if rng.gen::<f32>() >= probability {
            continue;
        }
        let zone = plan.zone(roam_zone(*assignment, *status));
        heading.target = zone.roam_bounds().random_point(rng);
    }
}
