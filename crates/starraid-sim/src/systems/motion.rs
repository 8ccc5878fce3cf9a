//! Player motion applied to every entity: forward translation followed by
//! the sequential two-axis turn.
//!
//! The turn works on the x/z pair by the yaw angle, then the y/z pair by the
//! pitch angle using the z that came out of the first step. Each pair is
//! updated in place: the new z is computed from the already-updated x (or y).
//! The result is not a pure rotation and does not preserve length. Every
//! entity gets the same transform, so relative geometry still holds.

use glam::DVec3;

use starraid_core::config::FieldConfig;
use starraid_core::enums::Turn;

/// Sine and cosine of this tick's turn angle plus the input signs.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rotation {
    sin: f64,
    cos: f64,
    yaw: f64,
    pitch: f64,
}

/// How the field moves relative to the player during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Distance the player advanced along +z.
    pub forward: f64,
    rotation: Option<Rotation>,
}

impl Motion {
    pub fn new(speed: f64, yaw: Turn, pitch: Turn, dt: f64, config: &FieldConfig) -> Self {
        let rotation = if yaw.is_neutral() && pitch.is_neutral() {
            None
        } else {
            let angle = dt * config.turn_rate;
            Some(Rotation {
                sin: angle.sin(),
                cos: angle.cos(),
                yaw: yaw.signum(),
                pitch: pitch.signum(),
            })
        };
        Self {
            forward: speed * dt * config.speed_factor,
            rotation,
        }
    }

    pub fn is_turning(&self) -> bool {
        self.rotation.is_some()
    }

    /// Move a field-space position by this tick's player motion.
    pub fn apply(&self, position: &mut DVec3) {
        position.z -= self.forward;

        let Some(rot) = self.rotation else {
            return;
        };

        if rot.yaw != 0.0 {
            let sin = rot.sin * rot.yaw;
            position.x = rot.cos * position.x - sin * position.z;
            position.z = sin * position.x + rot.cos * position.z;
        }

        if rot.pitch != 0.0 {
            let sin = rot.sin * rot.pitch;
            position.y = rot.cos * position.y - sin * position.z;
            position.z = sin * position.y + rot.cos * position.z;
        }
    }
}
