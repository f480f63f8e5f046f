//! Generation - construction of the floor plan and workforce

mod floor;
mod names;
mod workforce;

pub use floor::*;
pub use names::*;
pub use workforce::*;
