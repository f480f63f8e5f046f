//! Floor plan - the static zone and machine registries
//!
//! Layout lives on the 32x22 cell grid. Machines sit inside the production
//! zone; zones tile the full canvas.

use crate::components::{Machine, MachineKind, MachineStatus, Zone, ZoneId};
use crate::grid::{CellRect, Vec2};

/// The immutable scene layout: zones and machines
#[derive(Debug, Clone)]
pub struct FloorPlan {
    pub zones: Vec<Zone>,
    pub machines: Vec<Machine>,
}

impl FloorPlan {
    /// Look up a zone by key. Zones are stored in `ZoneId` declaration
    /// order, so every key resolves.
    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id as usize]
    }

    /// Topmost machine whose body rectangle contains the scene point
    pub fn machine_at(&self, point: Vec2) -> Option<usize> {
        self.machines
            .iter()
            .position(|m| m.body().contains(point))
    }
}

/// Build the fixed floor layout
pub fn build_floor_plan() -> FloorPlan {
    let zones = vec![
        Zone::new(ZoneId::Production, CellRect::new(0, 0, 20, 14)),
        Zone::new(ZoneId::Engineering, CellRect::new(20, 0, 12, 8)),
        Zone::new(ZoneId::RdLab, CellRect::new(20, 8, 12, 6)),
        Zone::new(ZoneId::Warehouse, CellRect::new(0, 14, 10, 8)),
        Zone::new(ZoneId::LoadingDock, CellRect::new(10, 14, 10, 8)),
        Zone::new(ZoneId::Admin, CellRect::new(20, 14, 12, 4)),
        Zone::new(ZoneId::Breakroom, CellRect::new(20, 18, 12, 4)),
    ];

    let specs: [(&'static str, MachineKind, MachineStatus, u32, u32, CellRect); 10] = [
        ("Assembly Line A", MachineKind::Assembly, MachineStatus::Running, 92, 420, CellRect::new(1, 2, 5, 2)),
        ("Assembly Line B", MachineKind::Assembly, MachineStatus::Running, 88, 380, CellRect::new(1, 5, 5, 2)),
        ("Assembly Line C", MachineKind::Assembly, MachineStatus::Maintenance, 0, 0, CellRect::new(1, 9, 5, 2)),
        ("CNC Router #1", MachineKind::Cnc, MachineStatus::Running, 95, 180, CellRect::new(7, 2, 3, 3)),
        ("CNC Router #2", MachineKind::Cnc, MachineStatus::Running, 91, 170, CellRect::new(7, 6, 3, 3)),
        ("Injection Mold", MachineKind::InjectionMolding, MachineStatus::Running, 87, 560, CellRect::new(11, 2, 3, 4)),
        ("Injection Mold B", MachineKind::InjectionMolding, MachineStatus::Idle, 0, 0, CellRect::new(11, 7, 3, 4)),
        ("Quality Check", MachineKind::QualityCheck, MachineStatus::Running, 98, 900, CellRect::new(15, 2, 4, 3)),
        ("Quality Check B", MachineKind::QualityCheck, MachineStatus::Running, 96, 850, CellRect::new(15, 6, 4, 3)),
        ("Packaging Unit", MachineKind::Packaging, MachineStatus::Running, 94, 750, CellRect::new(15, 10, 4, 3)),
    ];

    let machines = specs
        .into_iter()
        .enumerate()
        .map(|(idx, (name, kind, status, efficiency, output, cells))| Machine {
            name,
            kind,
            status,
            efficiency,
            output,
            cells,
            phase: idx as f32,
        })
        .collect();

    FloorPlan { zones, machines }
}
