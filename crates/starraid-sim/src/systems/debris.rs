//! Explosion debris: spawn, radiate, and clear together on one timer.

use glam::DVec3;
use rand::Rng;

use starraid_core::config::FieldConfig;
use starraid_core::events::FieldEvent;
use starraid_core::types::Location;

use crate::event_queue::EventQueue;
use crate::pools::DebrisCloud;
use crate::systems::motion::Motion;

/// Respawn the whole pool at `position`, restarting the timer.
pub fn spawn<R: Rng>(
    cloud: &mut DebrisCloud,
    position: DVec3,
    config: &FieldConfig,
    rng: &mut R,
    events: &mut EventQueue,
) {
    for particle in &mut cloud.particles {
        particle.location = Location::at(position);
        particle.radiate = DVec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
    }
    cloud.remaining = config.debris_duration;
    log::debug!("explosion at {position}");
    events.push(FieldEvent::ExplosionStarted { position });
}

/// Tick the explosion timer and move the particles.
pub fn run(
    cloud: &mut DebrisCloud,
    motion: &Motion,
    config: &FieldConfig,
    dt: f64,
    events: &mut EventQueue,
) {
    if !cloud.is_active() {
        return;
    }

    cloud.remaining -= dt;
    if cloud.remaining <= 0.0 {
        cloud.clear();
        events.push(FieldEvent::DebrisCleared);
        return;
    }

    let spread = config.debris_speed * dt;
    for particle in &mut cloud.particles {
        motion.apply(&mut particle.location.position);
        particle.location.position += particle.radiate * spread;
    }
}
