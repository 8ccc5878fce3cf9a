//! Fixed-capacity entity pools.
//!
//! Every entity lives in a slot that is never freed: "destroying" hides the
//! location in place and "creating" overwrites the slot.

use std::fmt;

use glam::DVec3;

use starraid_core::constants::DEBRIS_COUNT;
use starraid_core::enums::{HitOutcome, MissileDirection};
use starraid_core::types::Location;

/// Externally supplied behaviour of a bogey.
///
/// The engine calls these but never interprets them. `on_update` receives the
/// bogey's current position and writes the velocity it wants for this tick.
pub trait BogeyBehavior: Send {
    fn on_update(&mut self, position: DVec3, velocity: &mut DVec3, dt: f64);

    /// Called once per missile hit. Returning `Destroyed` clears the slot.
    fn on_missile_hit(&mut self, position: DVec3) -> HitOutcome;
}

/// Behaviour of an empty slot: holds still, ignores hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBehavior;

impl BogeyBehavior for NullBehavior {
    fn on_update(&mut self, _position: DVec3, _velocity: &mut DVec3, _dt: f64) {}

    fn on_missile_hit(&mut self, _position: DVec3) -> HitOutcome {
        HitOutcome::Survived
    }
}

/// A decorative star. Always visible; relocated instead of removed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Star {
    pub location: Location,
}

/// Where and how to place a bogey.
#[derive(Debug, Clone, PartialEq)]
pub struct BogeySpawn {
    pub position: DVec3,
    /// Text the renderer draws for this bogey.
    pub glyph: String,
    /// Multiplies both the drawn size and the collision extent.
    pub size_scale: f64,
}

impl Default for BogeySpawn {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            glyph: "\u{b7}".to_string(),
            size_scale: 1.0,
        }
    }
}

impl BogeySpawn {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// A maneuvering craft in one of the two bogey slots.
pub struct Bogey {
    pub location: Location,
    /// Velocity written by the behaviour each tick (field units per second,
    /// before the speed factor).
    pub velocity: DVec3,
    pub glyph: String,
    pub size_scale: f64,
    behavior: Box<dyn BogeyBehavior>,
}

impl fmt::Debug for Bogey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bogey")
            .field("location", &self.location)
            .field("velocity", &self.velocity)
            .field("glyph", &self.glyph)
            .field("size_scale", &self.size_scale)
            .finish_non_exhaustive()
    }
}

impl Default for Bogey {
    fn default() -> Self {
        Self {
            location: Location::default(),
            velocity: DVec3::ZERO,
            glyph: String::new(),
            size_scale: 1.0,
            behavior: Box::new(NullBehavior),
        }
    }
}

impl Bogey {
    /// Occupy the slot.
    pub fn set(&mut self, spawn: BogeySpawn, behavior: Box<dyn BogeyBehavior>) {
        self.location = Location::at(spawn.position);
        self.velocity = DVec3::ZERO;
        self.glyph = spawn.glyph;
        self.size_scale = spawn.size_scale;
        self.behavior = behavior;
    }

    /// Empty the slot and drop its behaviour.
    pub fn clear(&mut self) {
        self.location.hide();
        self.velocity = DVec3::ZERO;
        self.behavior = Box::new(NullBehavior);
    }

    pub fn is_valid(&self) -> bool {
        self.location.visible
    }

    /// Let the behaviour choose this tick's velocity.
    pub fn steer(&mut self, dt: f64) {
        self.behavior
            .on_update(self.location.position, &mut self.velocity, dt);
    }

    /// Report a missile hit to the behaviour.
    pub fn hit(&mut self) -> HitOutcome {
        self.behavior.on_missile_hit(self.location.position)
    }
}

/// A missile slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Missile {
    pub location: Location,
    pub direction: MissileDirection,
    /// Seconds left; positive while the missile is visible.
    pub remaining_lifetime: f64,
}

impl Missile {
    pub fn fire(&mut self, position: DVec3, direction: MissileDirection, lifetime: f64) {
        self.location = Location::at(position);
        self.direction = direction;
        self.remaining_lifetime = lifetime;
    }

    /// Remove from play, e.g. after a collision.
    pub fn invalidate(&mut self) {
        self.location.hide();
        self.remaining_lifetime = 0.0;
    }

    pub fn is_live(&self) -> bool {
        self.location.visible
    }
}

/// One explosion particle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DebrisParticle {
    pub location: Location,
    /// Direction of travel away from the blast, each component in [-1, 1].
    pub radiate: DVec3,
}

/// The debris pool and its shared explosion timer.
#[derive(Debug, Clone, PartialEq)]
pub struct DebrisCloud {
    pub particles: [DebrisParticle; DEBRIS_COUNT],
    /// Seconds until every particle disappears; 0 when no explosion is active.
    pub remaining: f64,
}

impl Default for DebrisCloud {
    fn default() -> Self {
        Self {
            particles: [DebrisParticle::default(); DEBRIS_COUNT],
            remaining: 0.0,
        }
    }
}

impl DebrisCloud {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Hide every particle and stop the timer.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
        for particle in &mut self.particles {
            particle.location.hide();
        }
    }
}
