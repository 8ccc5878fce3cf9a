//! Simulation constants and tuning parameters.
//!
//! Capacities are fixed at compile time. The tunables below are the
//! defaults of `FieldConfig` and can be overridden from a config file.

/// Driver tick rate (Hz).
pub const TICK_RATE: u32 = 25;

/// Seconds per tick at the default tick rate (40 ms).
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Capacities ---

/// Number of stars in the field.
pub const STAR_COUNT: usize = 24;

/// Number of bogey slots.
pub const BOGEY_COUNT: usize = 2;

/// Number of missile slots (two player tubes, one enemy).
pub const MISSILE_COUNT: usize = 3;

/// Number of particles spawned by one explosion.
pub const DEBRIS_COUNT: usize = 20;

// --- Rendering ---

/// Base size factor (screen units at depth 1).
pub const SIZE_FACTOR: f64 = 4.0;

/// Observer distance added to depth before the perspective divide.
/// A literal pinhole model would use 0; 2 softens the rotation artefacts.
pub const OBSERVER_DISTANCE: f64 = 2.0;

/// Deepest point (metrons) drawn in the forward and aft views.
pub const MAX_VIEW_DEPTH: f64 = 120.0;

/// Half-extent of the scan map (metrons from the player on x and z).
pub const SCAN_DISTANCE: f64 = 150.0;

/// Depth-independent size of a scan blip, scaled by the base size factor.
pub const SCAN_SIZE: f64 = 0.005;

/// Lower bound on depth used by the perspective size functions.
pub const MIN_SIZE_DEPTH: f64 = 0.01;

// --- Recycling volumes ---

/// Half-width of the forward/aft star volume on x and y.
pub const FIELD_HALF_WIDTH: f64 = 100.1;

/// Depth of the forward/aft star volume.
pub const FIELD_DEPTH: f64 = 140.01;

/// Gap kept between the viewer and the nearest recycled star.
pub const FIELD_NEAR: f64 = 0.01;

// --- Motion ---

/// Multiplier converting commanded speed into field units per second.
pub const SPEED_FACTOR: f64 = 2.5;

/// Turn rate in radians per second.
pub const TURN_RATE: f64 = 0.4;

// --- Missiles ---

/// Missile speed along its travel axis (metrons per second, before speed factor).
pub const MISSILE_SPEED: f64 = 62.5;

/// Missile lifetime in seconds.
pub const MISSILE_LIFETIME: f64 = 2.0;

/// Collision half-extent of a missile.
pub const MISSILE_RADIUS: f64 = 1.0;

// --- Bogeys ---

/// Collision half-extent of a bogey at size scale 1.
pub const BOGEY_RADIUS: f64 = 2.0;

// --- Debris ---

/// Debris radiation speed (field units per second).
pub const DEBRIS_SPEED: f64 = 20.0;

/// Explosion duration in seconds.
pub const DEBRIS_DURATION: f64 = 2.0;

/// Size of a debris particle relative to the base size factor.
pub const DEBRIS_SIZE_SCALE: f64 = 0.5;

// --- Viewport ---

/// Window size assumed until the renderer reports one.
pub const DEFAULT_WINDOW_WIDTH: f64 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;
