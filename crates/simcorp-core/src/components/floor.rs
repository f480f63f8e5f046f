//! Floor structure: zones and machines
//!
//! Both are immutable registry data. Machines animate, but the animated
//! glow/LED values are derived per tick and never stored here.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ROAM_INSET_BOTTOM, ROAM_INSET_TOP, ROAM_INSET_TOP_BREAKROOM, ROAM_INSET_X,
};
use crate::grid::{CellRect, Rect};

/// Stable zone key. Workers are assigned to zones by key and bound to the
/// zone's roam rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    Production,
    Engineering,
    RdLab,
    Warehouse,
    LoadingDock,
    Admin,
    Breakroom,
}

impl ZoneId {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneId::Production => "PRODUCTION FLOOR",
            ZoneId::Engineering => "ENGINEERING",
            ZoneId::RdLab => "R&D LAB",
            ZoneId::Warehouse => "WAREHOUSE",
            ZoneId::LoadingDock => "LOADING DOCK",
            ZoneId::Admin => "ADMIN / HR",
            ZoneId::Breakroom => "BREAK ROOM",
        }
    }

    /// Short lowercase name for tooltip display
    pub fn name(&self) -> &'static str {
        match self {
            ZoneId::Production => "production",
            ZoneId::Engineering => "engineering",
            ZoneId::RdLab => "rd-lab",
            ZoneId::Warehouse => "warehouse",
            ZoneId::LoadingDock => "loading-dock",
            ZoneId::Admin => "admin",
            ZoneId::Breakroom => "breakroom",
        }
    }
}

/// Zone - a fixed rectangular region of the floor plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    /// Placement in grid cells
    pub cells: CellRect,
}

impl Zone {
    pub fn new(id: ZoneId, cells: CellRect) -> Self {
        Self { id, cells }
    }

    /// Full pixel bounds of the zone
    pub fn bounds(&self) -> Rect {
        self.cells.to_pixels()
    }

    /// Pixel bounds workers may roam inside. Inset from the walls so avatars
    /// stay clear of borders and the label plaque.
    pub fn roam_bounds(&self) -> Rect {
        let top = match self.id {
            ZoneId::Breakroom => ROAM_INSET_TOP_BREAKROOM,
            _ => ROAM_INSET_TOP,
        };
        self.bounds()
            .inset(ROAM_INSET_X, top, ROAM_INSET_X, ROAM_INSET_BOTTOM)
    }
}

/// Machine category. Each kind renders a distinct decorative glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineKind {
    Assembly,
    Cnc,
    InjectionMolding,
    QualityCheck,
    Packaging,
}

impl MachineKind {
    pub fn name(&self) -> &'static str {
        match self {
            MachineKind::Assembly => "ASSEMBLY",
            MachineKind::Cnc => "CNC",
            MachineKind::InjectionMolding => "INJECTION",
            MachineKind::QualityCheck => "QUALITY",
            MachineKind::Packaging => "PACKAGING",
        }
    }
}

/// Operating status driving the machine's animation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineStatus {
    Running,
    Maintenance,
    Idle,
}

impl MachineStatus {
    pub fn name(&self) -> &'static str {
        match self {
            MachineStatus::Running => "running",
            MachineStatus::Maintenance => "maintenance",
            MachineStatus::Idle => "idle",
        }
    }
}

/// Machine - a fixed installation on the production floor. Registry data,
/// never persisted, so the name can borrow from the binary.
#[derive(Debug, Clone)]
pub struct Machine {
    pub name: &'static str,
    pub kind: MachineKind,
    pub status: MachineStatus,
    /// Efficiency percentage (0 when not running)
    pub efficiency: u32,
    /// Output rate in units per hour (0 when not running)
    pub output: u32,
    /// Placement in grid cells
    pub cells: CellRect,
    /// Per-machine animation phase offset so machines pulse out of sync
    pub phase: f32,
}

impl Machine {
    /// Pixel rectangle of the machine body, inset 4px inside its cells
    pub fn body(&self) -> Rect {
        self.cells.to_pixels().inset(4.0, 4.0, 4.0, 4.0)
    }
}
