//! Constants - tuning parameters for the floor simulation

/// Logical grid width in cells.
pub const GRID_COLS: u32 = 32;

/// Logical grid height in cells.
pub const GRID_ROWS: u32 = 22;

/// Pixel size of one grid cell.
pub const CELL_SIZE: f32 = 28.0;

/// Canvas width in pixels (columns x cell size).
pub const FLOOR_WIDTH: f32 = GRID_COLS as f32 * CELL_SIZE;

/// Canvas height in pixels (rows x cell size).
pub const FLOOR_HEIGHT: f32 = GRID_ROWS as f32 * CELL_SIZE;

/// Worker movement speed in pixels per second.
pub const WORKER_SPEED: f32 = 15.0;

/// Distance from target below which a worker counts as arrived.
pub const ARRIVAL_EPSILON: f32 = 0.5;

/// Mean wall-clock seconds between wander target changes per worker.
/// Retarget probability per sample is derived from elapsed time so the
/// cadence is independent of the sample rate.
pub const MEAN_WANDER_INTERVAL: f32 = 0.9;

/// Cap on elapsed seconds fed to one physics sample. A stalled frame
/// callback (backgrounded window) must not turn into a teleport.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Wall-clock seconds between machine animation ticks.
pub const TICK_INTERVAL: f32 = 0.2;

/// Hit-test radius around a worker's rendered position, in scene pixels.
pub const WORKER_HIT_RADIUS: f32 = 10.0;

/// Peak opacity of the running-machine glow overlay.
pub const RUNNING_GLOW_MAX: f32 = 0.25;

/// Floor of the maintenance LED blink opacity.
pub const LED_MIN_OPACITY: f32 = 0.4;

/// Worker bob amplitude in pixels.
pub const BOB_AMPLITUDE: f32 = 1.5;

/// Worker bob angular frequency in radians per second.
pub const BOB_FREQUENCY: f32 = 2.5;

// Roam-rectangle insets keep workers clear of zone walls and label plaques.
pub const ROAM_INSET_X: f32 = 20.0;
pub const ROAM_INSET_TOP: f32 = 30.0;
pub const ROAM_INSET_BOTTOM: f32 = 10.0;
/// The breakroom has no plaque clearance issue on top; workers may sit closer.
pub const ROAM_INSET_TOP_BREAKROOM: f32 = 20.0;
