//! Bogey flight: player motion, then the behaviour's own velocity.
//!
//! Bogeys are never recycled; they stay where their behaviour takes them.

use starraid_core::config::FieldConfig;

use crate::pools::Bogey;
use crate::systems::motion::Motion;

/// Advance every occupied bogey slot by one tick.
pub fn run(bogeys: &mut [Bogey], motion: &Motion, config: &FieldConfig, dt: f64) {
    for bogey in bogeys.iter_mut() {
        if !bogey.location.visible {
            continue;
        }
        motion.apply(&mut bogey.location.position);
        bogey.steer(dt);
        bogey.location.position += bogey.velocity * config.speed_factor * dt;
    }
}
