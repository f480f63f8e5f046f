//! SimCorp Core - Factory Floor Simulation Engine
//!
//! An ECS-based simulation of a factory floor with zones, machines and
//! wandering worker avatars. This crate owns all temporal state of the
//! scene; rendering and input live in the viewer.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: Workers roaming the floor
//! - **Components**: Pure data attached to entities (Position, Heading, Role, etc.)
//! - **Systems**: Logic that queries and updates components
//!
//! Zones and machines are immutable registries held by the engine rather
//! than entities; only workers carry mutable state.
//!
//! # Example
//!
//! ```rust,no_run
//! use simcorp_core::prelude::*;
//!
//! let mut engine = FloorEngine::new(FloorConfig::default());
//!
//! // Run simulation
//! loop {
//!     engine.update(1.0 / 60.0); // 60 FPS
//! }
//! ```

pub mod components;
pub mod constants;
pub mod engine;
pub mod generation;
pub mod grid;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::{FloorConfig, FloorEngine};
    pub use crate::grid::{CellRect, Rect, Vec2};
}
