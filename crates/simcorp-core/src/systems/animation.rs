//! Animation derivations - pure functions of (entity, tick-or-time)
//!
//! Simulated state (position, target, status) never stores these values;
//! the viewer recomputes them every frame from the shared clocks.

use crate::components::{Machine, MachineStatus};
use crate::constants::{BOB_AMPLITUDE, BOB_FREQUENCY, LED_MIN_OPACITY, RUNNING_GLOW_MAX};

/// Glow overlay opacity for a running machine: a smoothed signed-sine
/// oscillation scaled into [0, RUNNING_GLOW_MAX].
pub fn running_glow(tick: u64, phase: f32) -> f32 {
    (0.5 + 0.5 * (tick as f32 * 0.3 + phase).sin()) * RUNNING_GLOW_MAX
}

/// LED blink opacity for a machine under maintenance: an absolute-value sine
/// pulse in [LED_MIN_OPACITY, 1.0]. Sharper than the running glow and never
/// crosses zero.
pub fn maintenance_led(tick: u64, phase: f32) -> f32 {
    LED_MIN_OPACITY + (1.0 - LED_MIN_OPACITY) * (tick as f32 * 0.4 + phase).sin().abs()
}

/// LED opacity for a machine given its status and the shared tick.
/// Running and idle LEDs hold steady; only maintenance blinks.
pub fn led_opacity(machine: &Machine, tick: u64) -> f32 {
    match machine.status {
        MachineStatus::Maintenance => maintenance_led(tick, machine.phase),
        _ => 1.0,
    }
}

/// Glow overlay opacity for a machine given its status and the shared tick.
pub fn glow_opacity(machine: &Machine, tick: u64) -> f32 {
    match machine.status {
        MachineStatus::Running => running_glow(tick, machine.phase),
        _ => 0.0,
    }
}

/// Rendered vertical bob offset for a worker at absolute animation time.
pub fn bob_offset(time_seconds: f32, phase: f32) -> f32 {
    (time_seconds * BOB_FREQUENCY + phase).sin() * BOB_AMPLITUDE
}

/// Bob phase for the worker spawned at `index`. Spreads phases far enough
/// apart that neighbors visibly desynchronize.
pub fn bob_phase_for(index: usize) -> f32 {
    index as f32 * 0.7
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellRect;

    fn machine(status: MachineStatus, phase: f32) -> Machine {
        Machine {
            name: "CNC Router #1",
            kind: crate::components::MachineKind::Cnc,
            status,
            efficiency: 95,
            output: 180,
            cells: CellRect::new(7, 2, 3, 3),
            phase,
        }
    }

    #[test]
    fn test_running_glow_envelope() {
        for tick in 0..500 {
            let glow = running_glow(tick, 3.0);
            assert!(glow >= 0.0);
            assert!(glow <= RUNNING_GLOW_MAX + 1e-6);
        }
    }

    #[test]
    fn test_maintenance_led_range() {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for tick in 0..500 {
            let led = maintenance_led(tick, 1.0);
            assert!(led >= LED_MIN_OPACITY - 1e-6);
            assert!(led <= 1.0 + 1e-6);
            min = min.min(led);
            max = max.max(led);
        }
        // The pulse actually sweeps its documented range
        assert!(min < LED_MIN_OPACITY + 0.05);
        assert!(max > 0.95);
    }

    #[test]
    fn test_led_never_signed() {
        // The maintenance pulse rides on |sin|, unlike the running glow's
        // signed-sine envelope; it must never dip toward zero.
        for tick in 0..1000 {
            assert!(maintenance_led(tick, 0.5) >= LED_MIN_OPACITY - 1e-6);
        }
    }

    #[test]
    fn test_status_routing() {
        let tick = 17;
        let running = machine(MachineStatus::Running, 2.0);
        let maintenance = machine(MachineStatus::Maintenance, 2.0);
        let idle = machine(MachineStatus::Idle, 2.0);

        assert!(glow_opacity(&running, tick) > 0.0 || glow_opacity(&running, tick + 5) > 0.0);
        assert_eq!(glow_opacity(&maintenance, tick), 0.0);
        assert_eq!(glow_opacity(&idle, tick), 0.0);

        assert_eq!(led_opacity(&running, tick), 1.0);
        assert_eq!(led_opacity(&idle, tick), 1.0);
        assert!(led_opacity(&maintenance, tick) < 1.0 + 1e-6);
    }

    #[test]
    fn test_idle_led_static() {
        let idle = machine(MachineStatus::Idle, 0.0);
        let first = led_opacity(&idle, 0);
        for tick in 1..100 {
            assert_eq!(led_opacity(&idle, tick), first);
        }
    }

    #[test]
    fn test_bob_is_bounded_and_phased() {
        for i in 0..50 {
            let phase = bob_phase_for(i);
            for step in 0..200 {
                let t = step as f32 * 0.05;
                assert!(bob_offset(t, phase).abs() <= BOB_AMPLITUDE + 1e-6);
            }
        }
        // Different identities produce different offsets at the same instant
        assert!((bob_offset(1.0, bob_phase_for(0)) - bob_offset(1.0, bob_phase_for(1))).abs() > 1e-3);
    }
}
