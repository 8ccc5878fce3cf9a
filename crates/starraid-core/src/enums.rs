//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{BOGEY_COUNT, MISSILE_COUNT};

/// Active viewing mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// First-person view through the front window.
    #[default]
    Forward,
    /// Rear-view mirror: first-person view looking down -z.
    Aft,
    /// Long-range scan: top-down schematic map.
    Scan,
}

/// A signed unit turning input on one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl Turn {
    /// Build from any integer; only its sign matters.
    pub fn from_signum(value: i32) -> Self {
        match value.signum() {
            -1 => Turn::Negative,
            1 => Turn::Positive,
            _ => Turn::Neutral,
        }
    }

    /// -1.0, 0.0 or +1.0.
    pub fn signum(self) -> f64 {
        match self {
            Turn::Negative => -1.0,
            Turn::Neutral => 0.0,
            Turn::Positive => 1.0,
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Turn::Neutral
    }
}

/// Travel direction of a missile along the z axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissileDirection {
    /// Away from the viewer (+z).
    #[default]
    Fore,
    /// Toward the rear (-z).
    Aft,
}

impl MissileDirection {
    /// +1.0 for `Fore`, -1.0 for `Aft`.
    pub fn signum(self) -> f64 {
        match self {
            MissileDirection::Fore => 1.0,
            MissileDirection::Aft => -1.0,
        }
    }
}

/// One of the two bogey slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BogeySlot {
    First,
    Second,
}

impl BogeySlot {
    pub const ALL: [BogeySlot; BOGEY_COUNT] = [BogeySlot::First, BogeySlot::Second];

    pub fn index(self) -> usize {
        match self {
            BogeySlot::First => 0,
            BogeySlot::Second => 1,
        }
    }

    /// Slot for a raw index.
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1. Callers are trusted game logic,
    /// so an out-of-range slot is a programming error.
    pub fn from_index(index: usize) -> Self {
        assert!(index < BOGEY_COUNT, "bogey slot {index} out of range");
        Self::ALL[index]
    }

    /// The other slot.
    pub fn other(self) -> Self {
        match self {
            BogeySlot::First => BogeySlot::Second,
            BogeySlot::Second => BogeySlot::First,
        }
    }
}

/// One of the three missile slots: two player tubes and one enemy missile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileSlot {
    PlayerLeft,
    PlayerRight,
    Enemy,
}

impl MissileSlot {
    pub const ALL: [MissileSlot; MISSILE_COUNT] = [
        MissileSlot::PlayerLeft,
        MissileSlot::PlayerRight,
        MissileSlot::Enemy,
    ];

    /// The player tubes, in collision-check order.
    pub const PLAYER: [MissileSlot; 2] = [MissileSlot::PlayerLeft, MissileSlot::PlayerRight];

    pub fn index(self) -> usize {
        match self {
            MissileSlot::PlayerLeft => 0,
            MissileSlot::PlayerRight => 1,
            MissileSlot::Enemy => 2,
        }
    }

    /// Slot for a raw index.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1 or 2.
    pub fn from_index(index: usize) -> Self {
        assert!(index < MISSILE_COUNT, "missile slot {index} out of range");
        Self::ALL[index]
    }

    pub fn is_player(self) -> bool {
        !matches!(self, MissileSlot::Enemy)
    }
}

/// What a draw record depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index")]
pub enum EntityKind {
    Star(usize),
    Missile(MissileSlot),
    Bogey(BogeySlot),
    Debris(usize),
}

/// Result of a bogey's missile-hit callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// The bogey absorbed the hit and stays in its slot.
    #[default]
    Survived,
    /// The bogey is gone; its slot is cleared.
    Destroyed,
}
