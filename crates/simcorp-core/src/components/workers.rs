//! Worker components: role, status, attributes and continuous motion state

use serde::{Deserialize, Serialize};

use super::floor::ZoneId;
use crate::grid::Vec2;

/// Worker's display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Worker role - drives iconography and attribute ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Worker,
    Engineer,
    Supervisor,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Engineer => "engineer",
            Role::Supervisor => "supervisor",
        }
    }
}

/// What the worker is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerStatus {
    Working,
    Break,
    Idle,
}

impl WorkerStatus {
    pub fn name(&self) -> &'static str {
        match self {
            WorkerStatus::Working => "working",
            WorkerStatus::Break => "break",
            WorkerStatus::Idle => "idle",
        }
    }
}

/// HR-style placeholder attributes shown in the tooltip
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Attributes {
    /// Efficiency percentage
    pub efficiency: u32,
    /// Morale percentage
    pub morale: u32,
    /// Tenure in game rounds
    pub tenure: u32,
    /// Annual salary in dollars
    pub salary: u32,
}

/// The zone a worker nominally belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Assignment(pub ZoneId);

/// The zone whose roam rectangle currently bounds the worker's motion.
/// Break-status workers roam the breakroom regardless of assignment.
pub fn roam_zone(assignment: Assignment, status: WorkerStatus) -> ZoneId {
    match status {
        WorkerStatus::Break => ZoneId::Breakroom,
        _ => assignment.0,
    }
}

/// Continuous position in scene pixels. Rewritten every physics sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Current movement target in scene pixels. Always present; a worker whose
/// position equals its target simply holds still until retargeted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Heading {
    pub target: Vec2,
}

impl Heading {
    pub fn new(target: Vec2) -> Self {
        Self { target }
    }
}

/// Phase offset for the rendered bob sinusoid, fixed at spawn so avatars
/// bob out of sync. Rendering-only; never feeds back into position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BobPhase(pub f32);
