//! Commands sent from the driver to the field engine.
//!
//! Bogey spawning is not a command: it carries a behaviour object and goes
//! through `FieldEngine::set_bogey` directly.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All serialisable inputs to the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldCommand {
    // --- Flight control ---
    /// Commanded speed in metrons per second.
    SetSpeed { speed: f64 },
    /// Turning inputs for the coming ticks.
    SetTurn { yaw: Turn, pitch: Turn },

    // --- Weapons ---
    /// Fire a missile from a slot, replacing whatever that slot held.
    FireMissile {
        slot: MissileSlot,
        position: DVec3,
        direction: MissileDirection,
    },

    // --- Entities ---
    /// Empty a bogey slot.
    ClearBogey { slot: BogeySlot },
    /// Empty both bogey slots and all missiles.
    ClearBogeysAndMissiles,
    /// Start an explosion at a point.
    Explosion { position: DVec3 },

    // --- View ---
    SetMode { mode: ViewMode },
    /// Show or hide the whole field.
    SetDisplay { visible: bool },
    /// Flip the field horizontally.
    SetMirror { mirrored: bool },

    // --- Lifecycle ---
    ResetForNewRound,
}
