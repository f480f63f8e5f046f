//! Shared viewer state: resources and marker components

use bevy::prelude::*;
use simcorp_core::engine::FloorEngine;
use simcorp_core::grid::Vec2 as SceneVec2;

/// The simulation engine wrapped as a Bevy resource
#[derive(Resource)]
pub struct Sim(pub FloorEngine);

/// Top-level view selected in the header bar. Only `Factory` renders the
/// animated floor; the rest show placeholders.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Factory,
    GlobalOps,
    Finance,
    Research,
    Marketing,
    Results,
}

impl ActiveView {
    pub const ALL: [ActiveView; 6] = [
        ActiveView::Factory,
        ActiveView::GlobalOps,
        ActiveView::Finance,
        ActiveView::Research,
        ActiveView::Marketing,
        ActiveView::Results,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Factory => "Factory",
            ActiveView::GlobalOps => "Global Ops",
            ActiveView::Finance => "Finance",
            ActiveView::Research => "R&D",
            ActiveView::Marketing => "Marketing",
            ActiveView::Results => "Results",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ActiveView::Factory => "",
            ActiveView::GlobalOps => "Global Operations Map",
            ActiveView::Finance => "Financial Dashboard",
            ActiveView::Research => "R&D Lab & Tech Tree",
            ActiveView::Marketing => "Marketing War Room",
            ActiveView::Results => "Round Results",
        }
    }
}

/// Module tab selected in the factory sub-navigation. Placeholder labels
/// only; the modules themselves do not exist yet.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveModule {
    Factory,
    Hr,
    Research,
    Marketing,
    Finance,
}

impl ActiveModule {
    pub const ALL: [ActiveModule; 5] = [
        ActiveModule::Factory,
        ActiveModule::Hr,
        ActiveModule::Research,
        ActiveModule::Marketing,
        ActiveModule::Finance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveModule::Factory => "Factory",
            ActiveModule::Hr => "HR",
            ActiveModule::Research => "R&D",
            ActiveModule::Marketing => "Marketing",
            ActiveModule::Finance => "Finance",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ActiveModule::Factory => crate::colors::CYAN,
            ActiveModule::Hr => crate::colors::GREEN,
            ActiveModule::Research => crate::colors::PURPLE,
            ActiveModule::Marketing => crate::colors::ORANGE,
            ActiveModule::Finance => crate::colors::ACCENT_GOLD,
        }
    }
}

/// Viewport controller state: the single owner of zoom and pan.
/// The camera transform eases toward this every frame.
#[derive(Resource)]
pub struct CameraState {
    /// Scene magnification, clamped to [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f32,
    /// Camera position in world units
    pub pan: Vec2,
    /// True while a middle/right-button drag is in flight
    pub dragging: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            dragging: false,
        }
    }
}

/// What the pointer is currently over
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverTarget {
    Worker(hecs::Entity),
    Machine(usize),
}

/// Current hover resolution, refreshed every frame from the live pointer
#[derive(Resource, Default)]
pub struct HoverState {
    pub target: Option<HoverTarget>,
    /// Pointer position in scene coordinates
    pub pointer: SceneVec2,
}

// Chrome markers

#[derive(Component)]
pub struct TickerText;

#[derive(Component)]
pub struct ViewTab(pub ActiveView);

#[derive(Component)]
pub struct ModuleNavBar;

#[derive(Component)]
pub struct ModuleTab(pub ActiveModule);

#[derive(Component)]
pub struct PlaceholderPanel;

#[derive(Component)]
pub struct PlaceholderText;

// Scene markers

/// Root of all retained floor visuals; hidden when another view is active
#[derive(Component)]
pub struct FloorRoot;

/// Pulsing glow overlay for the machine at this registry index
#[derive(Component)]
pub struct MachineGlow(pub usize);

/// Status LED for the machine at this registry index
#[derive(Component)]
pub struct MachineLed(pub usize);

#[derive(Component)]
pub struct TooltipBackground;

#[derive(Component)]
pub struct TooltipText;
