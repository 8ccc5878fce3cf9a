//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A position in field space plus a visibility flag.
///
/// Field space is viewer-relative: the player sits at the origin looking
/// down +z, x grows to the right and y grows downward on screen.
/// Every entity embeds its own `Location` by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub visible: bool,
    pub position: DVec3,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            visible: false,
            position: DVec3::splat(0.1),
        }
    }
}

impl Location {
    /// A visible location at the given position.
    pub fn at(position: DVec3) -> Self {
        Self {
            visible: true,
            position,
        }
    }

    /// Hide this location. The position is kept as-is.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of non-degenerate updates applied so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one update of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
