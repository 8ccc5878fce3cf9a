//! Events emitted by the field for game logic and audio feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something that happened during an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldEvent {
    /// A missile ran out of lifetime.
    MissileExpired { slot: MissileSlot },
    /// The enemy missile was shot down by a player missile.
    MissilesIntercepted {
        enemy: MissileSlot,
        player: MissileSlot,
        position: DVec3,
    },
    /// A player missile struck a bogey.
    BogeyHit {
        slot: BogeySlot,
        missile: MissileSlot,
        position: DVec3,
        outcome: HitOutcome,
    },
    /// An explosion began (debris pool respawned).
    ExplosionStarted { position: DVec3 },
    /// The explosion timer ran out and all debris was removed.
    DebrisCleared,
}
