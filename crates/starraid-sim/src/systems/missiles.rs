//! Missile flight: player motion, travel along z, lifetime decay.

use starraid_core::config::FieldConfig;
use starraid_core::enums::MissileSlot;
use starraid_core::events::FieldEvent;

use crate::event_queue::EventQueue;
use crate::pools::Missile;
use crate::systems::motion::Motion;

/// Advance every live missile by one tick.
pub fn run(
    missiles: &mut [Missile],
    motion: &Motion,
    config: &FieldConfig,
    dt: f64,
    events: &mut EventQueue,
) {
    let travel = config.missile_speed * config.speed_factor * dt;

    for (index, missile) in missiles.iter_mut().enumerate() {
        if !missile.location.visible {
            continue;
        }

        let pos = &mut missile.location.position;
        motion.apply(pos);
        pos.z += missile.direction.signum() * travel;

        missile.remaining_lifetime -= dt;
        if missile.remaining_lifetime <= 0.0 {
            missile.remaining_lifetime = 0.0;
            missile.location.hide();
            let slot = MissileSlot::from_index(index);
            log::debug!("missile {slot:?} expired");
            events.push(FieldEvent::MissileExpired { slot });
        }
    }
}
