//! Collision resolution between missiles and bogeys.
//!
//! Overlap is a cube test: each axis separation must be below the summed
//! half-extents. Rules run in a fixed order each tick:
//! 1. the enemy missile against each player missile;
//! 2. each player missile against bogey 0, then bogey 1.
//!
//! Hidden entities never collide.

use glam::DVec3;
use rand::Rng;

use starraid_core::config::FieldConfig;
use starraid_core::enums::{BogeySlot, HitOutcome, MissileSlot};
use starraid_core::events::FieldEvent;

use crate::event_queue::EventQueue;
use crate::pools::{Bogey, DebrisCloud, Missile};
use crate::systems::debris;

/// Cube overlap of two entities with half-extents `s1` and `s2`.
pub fn collides(p1: DVec3, s1: f64, p2: DVec3, s2: f64) -> bool {
    let reach = s1 + s2;
    let d = (p1 - p2).abs();
    d.x < reach && d.y < reach && d.z < reach
}

/// Run both collision rules for this tick.
pub fn run<R: Rng>(
    missiles: &mut [Missile],
    bogeys: &mut [Bogey],
    cloud: &mut DebrisCloud,
    config: &FieldConfig,
    rng: &mut R,
    events: &mut EventQueue,
) {
    missile_intercepts(missiles, cloud, config, rng, events);
    bogey_hits(missiles, bogeys, cloud, config, rng, events);
}

/// Rule 1: a player missile shoots down the enemy missile.
fn missile_intercepts<R: Rng>(
    missiles: &mut [Missile],
    cloud: &mut DebrisCloud,
    config: &FieldConfig,
    rng: &mut R,
    events: &mut EventQueue,
) {
    let enemy = MissileSlot::Enemy;
    if !missiles[enemy.index()].is_live() {
        return;
    }
    let enemy_pos = missiles[enemy.index()].location.position;

    for player in MissileSlot::PLAYER {
        let missile = &missiles[player.index()];
        if !missile.is_live() {
            continue;
        }
        if collides(
            enemy_pos,
            config.missile_radius,
            missile.location.position,
            config.missile_radius,
        ) {
            debris::spawn(cloud, enemy_pos, config, rng, events);
            missiles[enemy.index()].invalidate();
            missiles[player.index()].invalidate();
            log::debug!("missile {player:?} intercepted the enemy missile");
            events.push(FieldEvent::MissilesIntercepted {
                enemy,
                player,
                position: enemy_pos,
            });
            return;
        }
    }
}

/// Rule 2: player missiles strike bogeys.
fn bogey_hits<R: Rng>(
    missiles: &mut [Missile],
    bogeys: &mut [Bogey],
    cloud: &mut DebrisCloud,
    config: &FieldConfig,
    rng: &mut R,
    events: &mut EventQueue,
) {
    for player in MissileSlot::PLAYER {
        for slot in BogeySlot::ALL {
            let missile = &mut missiles[player.index()];
            let bogey = &mut bogeys[slot.index()];
            if !missile.is_live() || !bogey.is_valid() {
                continue;
            }
            let bogey_pos = bogey.location.position;
            if !collides(
                missile.location.position,
                config.missile_radius,
                bogey_pos,
                config.bogey_radius * bogey.size_scale,
            ) {
                continue;
            }

            missile.invalidate();
            debris::spawn(cloud, bogey_pos, config, rng, events);
            let outcome = bogey.hit();
            if outcome == HitOutcome::Destroyed {
                bogey.clear();
            }
            log::debug!("missile {player:?} hit bogey {slot:?}: {outcome:?}");
            events.push(FieldEvent::BogeyHit {
                slot,
                missile: player,
                position: bogey_pos,
                outcome,
            });
        }
    }
}
