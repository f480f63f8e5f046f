//! Dashboard palette
//!
//! The shell is dark and dense; the floor itself stays vibrant so the
//! animated scene reads against the chrome.

use bevy::prelude::*;
use simcorp_core::components::{MachineStatus, Role, ZoneId};

// Shell
pub const BG_PRIMARY: Color = Color::srgb(0.039, 0.055, 0.090); // #0a0e17
pub const BG_SURFACE: Color = Color::srgb(0.067, 0.094, 0.153); // #111827
pub const BG_PANEL: Color = Color::srgb(0.102, 0.125, 0.208); // #1a2035
pub const BORDER: Color = Color::srgb(0.165, 0.208, 0.333); // #2a3555
pub const TICKER_BG: Color = Color::srgb(0.024, 0.039, 0.071); // #060a12

// Text
pub const TEXT_PRIMARY: Color = Color::srgb(0.886, 0.910, 0.941); // #e2e8f0
pub const TEXT_MUTED: Color = Color::srgb(0.392, 0.455, 0.545); // #64748b
pub const TEXT_DIM: Color = Color::srgb(0.278, 0.333, 0.412); // #475569

// Accent + status
pub const ACCENT_GOLD: Color = Color::srgb(0.961, 0.620, 0.043); // #f59e0b
pub const GREEN: Color = Color::srgb(0.133, 0.773, 0.369); // #22c55e
pub const RED: Color = Color::srgb(0.937, 0.267, 0.267); // #ef4444
pub const CYAN: Color = Color::srgb(0.024, 0.714, 0.831); // #06b6d4
pub const ORANGE: Color = Color::srgb(0.976, 0.451, 0.086); // #f97316
pub const PURPLE: Color = Color::srgb(0.659, 0.333, 0.969); // #a855f7

// Floor
pub const FLOOR_BG: Color = Color::srgb(0.165, 0.227, 0.290); // #2a3a4a
pub const GRID_LINE: Color = Color::srgba(0.227, 0.302, 0.376, 0.3); // #3a4d60
pub const MACHINE_BODY: Color = Color::srgb(0.118, 0.176, 0.239); // #1e2d3d
pub const MACHINE_EDGE: Color = Color::srgb(0.165, 0.251, 0.333); // #2a4055
pub const MACHINE_DETAIL: Color = Color::srgb(0.227, 0.333, 0.439); // #3a5570
pub const MACHINE_ACTIVE: Color = Color::srgb(0.133, 0.827, 0.933); // #22d3ee
pub const MACHINE_LABEL: Color = Color::srgb(0.784, 0.839, 0.898); // #c8d6e5

/// Zone fill colors, vibrant against the dark shell
pub fn zone_fill(id: ZoneId) -> Color {
    match id {
        ZoneId::Production => Color::srgb(0.227, 0.365, 0.478), // #3a5d7a
        ZoneId::Engineering => Color::srgb(0.176, 0.416, 0.290), // #2d6a4a
        ZoneId::RdLab => Color::srgb(0.227, 0.239, 0.416),      // #3a3d6a
        ZoneId::Warehouse => Color::srgb(0.416, 0.353, 0.227),  // #6a5a3a
        ZoneId::LoadingDock => Color::srgb(0.227, 0.353, 0.416), // #3a5a6a
        ZoneId::Admin => Color::srgb(0.353, 0.239, 0.416),      // #5a3d6a
        ZoneId::Breakroom => Color::srgb(0.290, 0.353, 0.227),  // #4a5a3a
    }
}

/// Avatar color per role
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Worker => Color::srgb(0.376, 0.647, 0.980),     // #60a5fa
        Role::Engineer => Color::srgb(0.204, 0.827, 0.600),   // #34d399
        Role::Supervisor => Color::srgb(0.984, 0.749, 0.141), // #fbbf24
    }
}

/// Status LED color per machine status
pub fn led_color(status: MachineStatus) -> Color {
    match status {
        MachineStatus::Running => GREEN,
        MachineStatus::Maintenance => ORANGE,
        MachineStatus::Idle => TEXT_DIM,
    }
}

/// Brighten a color by a 0-255 srgb step, like the zone border/plaque accents
pub fn lighten(color: Color, amount: f32) -> Color {
    let c = color.to_srgba();
    let step = amount / 255.0;
    Color::srgb(
        (c.red + step).clamp(0.0, 1.0),
        (c.green + step).clamp(0.0, 1.0),
        (c.blue + step).clamp(0.0, 1.0),
    )
}

pub fn darken(color: Color, amount: f32) -> Color {
    lighten(color, -amount)
}
