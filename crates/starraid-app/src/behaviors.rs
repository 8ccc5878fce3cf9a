//! Sample bogey behaviours used by the demo driver.

use glam::DVec3;

use starraid_core::enums::HitOutcome;
use starraid_sim::pools::BogeyBehavior;

/// Flies at a constant velocity and takes a number of hits to destroy.
#[derive(Debug, Clone)]
pub struct Drifter {
    pub velocity: DVec3,
    pub life: u32,
}

impl Drifter {
    pub fn new(velocity: DVec3, life: u32) -> Self {
        Self { velocity, life }
    }
}

impl BogeyBehavior for Drifter {
    fn on_update(&mut self, _position: DVec3, velocity: &mut DVec3, _dt: f64) {
        *velocity = self.velocity;
    }

    fn on_missile_hit(&mut self, _position: DVec3) -> HitOutcome {
        self.life = self.life.saturating_sub(1);
        if self.life == 0 {
            HitOutcome::Destroyed
        } else {
            HitOutcome::Survived
        }
    }
}

/// A stationary starbase. One hit destroys it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Starbase;

impl BogeyBehavior for Starbase {
    fn on_update(&mut self, _position: DVec3, velocity: &mut DVec3, _dt: f64) {
        *velocity = DVec3::ZERO;
    }

    fn on_missile_hit(&mut self, _position: DVec3) -> HitOutcome {
        HitOutcome::Destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drifter_survives_until_life_runs_out() {
        let mut drifter = Drifter::new(DVec3::X, 2);
        assert_eq!(drifter.on_missile_hit(DVec3::ZERO), HitOutcome::Survived);
        assert_eq!(drifter.on_missile_hit(DVec3::ZERO), HitOutcome::Destroyed);
    }

    #[test]
    fn test_drifter_sets_velocity() {
        let mut drifter = Drifter::new(DVec3::new(0.0, 0.0, -5.0), 1);
        let mut velocity = DVec3::ZERO;
        drifter.on_update(DVec3::ZERO, &mut velocity, 0.04);
        assert_eq!(velocity, DVec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_starbase_holds_still() {
        let mut base = Starbase;
        let mut velocity = DVec3::ONE;
        base.on_update(DVec3::ZERO, &mut velocity, 0.04);
        assert_eq!(velocity, DVec3::ZERO);
        assert_eq!(base.on_missile_hit(DVec3::ZERO), HitOutcome::Destroyed);
    }
}
